//! File name construction for renamed faces and their backups.
//!
//! All functions here work on a bare file name. Joining onto the folder is
//! left to [`Path::join`](std::path::Path::join) so a directory that happens
//! to contain the extension text never influences the result.

use crate::CubeFace;

/// Suffix appended to the base name of a file moved out of the way.
pub const BACKUP_SUFFIX: &str = "_old";

/// Split a file name into base name and extension.
///
/// The extension starts at the last `.` and includes it. Leading dots
/// belong to the base name, so `.hidden` has no extension while `sky.png`
/// splits into `sky` and `.png`. A trailing dot is kept as a one-character
/// extension.
#[must_use]
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let Some(dot) = file_name.rfind('.') else {
        return (file_name, "");
    };

    if file_name[..dot].bytes().all(|b| b == b'.') {
        return (file_name, "");
    }

    file_name.split_at(dot)
}

/// Name a source file should be renamed to for the given face.
///
/// # Example
///
/// ```
/// use cubemap_rename::{CubeFace, target_file_name};
///
/// assert_eq!(target_file_name(CubeFace::Right, "Skybox_PX.jpg"), "right.jpg");
/// ```
#[must_use]
pub fn target_file_name(face: CubeFace, source_name: &str) -> String {
    let (_, ext) = split_extension(source_name);
    format!("{}{ext}", face.name())
}

/// Name an occupied target is moved to before being replaced.
///
/// `left.png` becomes `left_old.png`.
#[must_use]
pub fn backup_file_name(target_name: &str) -> String {
    let (base, ext) = split_extension(target_name);
    format!("{base}{BACKUP_SUFFIX}{ext}")
}
