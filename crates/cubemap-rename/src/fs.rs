//! File-system operations used by the renamer.
//!
//! The renamer only ever asks two questions of the folder: is a name taken,
//! and move this entry to that name. [`DiskFs`] answers them against the
//! real disk, [`DryRunFs`] against an in-memory copy of the listing so a
//! dry run walks exactly the same code path as a real one.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// The operations the renamer performs on a folder.
pub trait FileSystem {
    /// Whether any entry currently occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Move the entry at `from` to `to`, replacing a file already at `to`.
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks still occupy the name.
        std::fs::symlink_metadata(path).is_ok()
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// Simulated file system tracking which paths are occupied.
#[derive(Debug, Default, Clone)]
pub struct DryRunFs {
    occupied: HashSet<PathBuf>,
}

impl DryRunFs {
    /// Create a simulation where exactly `paths` exist.
    #[must_use]
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            occupied: paths.into_iter().collect(),
        }
    }

    /// Paths that would exist after the operations applied so far.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.occupied.iter().map(PathBuf::as_path)
    }
}

impl FileSystem for DryRunFs {
    fn exists(&self, path: &Path) -> bool {
        self.occupied.contains(path)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if !self.occupied.remove(from) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", from.display()),
            ));
        }
        self.occupied.insert(to.to_path_buf());
        Ok(())
    }
}
