//! Scan a folder and rename cubemap faces in place.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::{DiskFs, DryRunFs, FileSystem};
use crate::path::{backup_file_name, target_file_name};
use crate::{CubeFace, RenameError, RenameResult};

/// Options controlling a rename run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Report what would happen without touching the folder.
    pub dry_run: bool,
}

/// A single action taken on the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameEvent {
    /// An entry already held the target name and was moved aside.
    BackedUp { existing: PathBuf, backup: PathBuf },
    /// An entry was moved to its face name.
    Renamed {
        from: String,
        to: String,
        face: CubeFace,
    },
}

impl fmt::Display for RenameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackedUp { existing, backup } => write!(
                f,
                "{} already exists, backed up to {}",
                existing.display(),
                backup.display()
            ),
            Self::Renamed { from, to, .. } => write!(f, "{from} -> {to}"),
        }
    }
}

/// Rename every cubemap face in `folder` to its face name.
///
/// Returns the actions performed, in order. See
/// [`rename_cubemap_images_with`] to observe actions as they happen.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// let events = cubemap_rename::rename_cubemap_images(Path::new("assets/skybox"))?;
/// for event in &events {
///     println!("{event}");
/// }
/// # Ok::<(), cubemap_rename::RenameError>(())
/// ```
pub fn rename_cubemap_images(folder: &Path) -> RenameResult<Vec<RenameEvent>> {
    rename_cubemap_images_with(folder, RenameOptions::default(), |_| {})
}

/// Rename every cubemap face in `folder`, calling `on_event` after each
/// action.
///
/// The folder must be an existing directory; otherwise
/// [`RenameError::NotADirectory`] is returned before anything is touched.
/// The listing is read once up front. A failed move aborts the run and
/// actions already performed stay in place.
pub fn rename_cubemap_images_with<F>(
    folder: &Path,
    options: RenameOptions,
    mut on_event: F,
) -> RenameResult<Vec<RenameEvent>>
where
    F: FnMut(&RenameEvent),
{
    if !folder.is_dir() {
        return Err(RenameError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    let names = list_entries(folder)?;
    tracing::debug!(
        folder = %folder.display(),
        entries = names.len(),
        dry_run = options.dry_run,
        "Scanning folder"
    );

    if options.dry_run {
        let mut fs = DryRunFs::new(names.iter().map(|name| folder.join(name)));
        rename_entries(&mut fs, folder, &names, &mut on_event)
    } else {
        rename_entries(&mut DiskFs, folder, &names, &mut on_event)
    }
}

/// Apply the rename rules to `names`, entries of `folder`, through `fs`.
///
/// Each name is matched at most once. Names that contain no axis code are
/// left alone. Names that are not valid UTF-8 are matched on their lossy
/// form; the source path keeps the original bytes.
pub fn rename_entries<FS, F>(
    fs: &mut FS,
    folder: &Path,
    names: &[OsString],
    mut on_event: F,
) -> RenameResult<Vec<RenameEvent>>
where
    FS: FileSystem,
    F: FnMut(&RenameEvent),
{
    let mut events = Vec::new();
    let mut emit = |event: RenameEvent| {
        on_event(&event);
        events.push(event);
    };

    for name in names {
        let display_name = name.to_string_lossy();
        let Some(face) = CubeFace::match_file_name(&display_name) else {
            continue;
        };

        let target_name = target_file_name(face, &display_name);
        if OsStr::new(&target_name) == name.as_os_str() {
            tracing::debug!(name = %display_name, %face, "Entry already has its face name");
            continue;
        }

        let from = folder.join(name);
        let to = folder.join(&target_name);

        if fs.exists(&to) {
            let backup = folder.join(backup_file_name(&target_name));
            fs.rename(&to, &backup)
                .map_err(|source| rename_error(&to, &backup, source))?;
            tracing::warn!(
                existing = %to.display(),
                backup = %backup.display(),
                "Target already exists, moved it aside"
            );
            emit(RenameEvent::BackedUp {
                existing: to.clone(),
                backup,
            });
        }

        fs.rename(&from, &to)
            .map_err(|source| rename_error(&from, &to, source))?;
        tracing::info!(from = %display_name, to = %target_name, %face, "Renamed face");
        emit(RenameEvent::Renamed {
            from: display_name.into_owned(),
            to: target_name,
            face,
        });
    }

    Ok(events)
}

fn list_entries(folder: &Path) -> RenameResult<Vec<OsString>> {
    let read_dir_error = |source: io::Error| RenameError::ReadDir {
        path: folder.to_path_buf(),
        source,
    };

    std::fs::read_dir(folder)
        .map_err(read_dir_error)?
        .map(|entry| entry.map(|e| e.file_name()).map_err(read_dir_error))
        .collect()
}

fn rename_error(from: &Path, to: &Path, source: io::Error) -> RenameError {
    RenameError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}
