use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while renaming a cubemap folder.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("{} is not a valid folder", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read folder path: {0}")]
    Prompt(#[from] io::Error),
}

pub type RenameResult<T> = Result<T, RenameError>;
