//! Cubemap faces and the axis-code name map.

use std::fmt;

/// One face of a cubemap, named by where it sits around the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// -X face (`nx`)
    Left,
    /// +X face (`px`)
    Right,
    /// -Y face (`ny`)
    Bottom,
    /// +Y face (`py`)
    Top,
    /// -Z face (`nz`)
    Back,
    /// +Z face (`pz`)
    Front,
}

impl CubeFace {
    /// All six faces in matching priority order.
    ///
    /// A file name containing several axis codes is assigned to whichever
    /// face comes first here.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Bottom,
        CubeFace::Top,
        CubeFace::Back,
        CubeFace::Front,
    ];

    /// Returns the axis code for the face (e.g., "nx", "pz").
    #[must_use]
    pub const fn axis_code(self) -> &'static str {
        match self {
            CubeFace::Left => "nx",
            CubeFace::Right => "px",
            CubeFace::Bottom => "ny",
            CubeFace::Top => "py",
            CubeFace::Back => "nz",
            CubeFace::Front => "pz",
        }
    }

    /// Returns the canonical file stem for the face (e.g., "left", "front").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Bottom => "bottom",
            CubeFace::Top => "top",
            CubeFace::Back => "back",
            CubeFace::Front => "front",
        }
    }

    /// Looks up a face by its exact axis code, ignoring case.
    #[must_use]
    pub fn from_axis_code(code: &str) -> Option<CubeFace> {
        Self::ALL
            .into_iter()
            .find(|face| face.axis_code().eq_ignore_ascii_case(code))
    }

    /// Finds the face a file name refers to.
    ///
    /// The name is lowercased and searched for each axis code as a
    /// substring, in [`CubeFace::ALL`] order. Returns `None` when no code
    /// appears anywhere in the name.
    #[must_use]
    pub fn match_file_name(file_name: &str) -> Option<CubeFace> {
        let lower = file_name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|face| lower.contains(face.axis_code()))
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
