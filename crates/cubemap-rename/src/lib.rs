//! Rename cubemap face images from axis codes to face names.
//!
//! Cubemap exporters usually name the six faces after the signed axis they
//! look down (`sky_nx.png`, `sky_pz.png`, ...), while most engines and
//! loaders expect semantic names (`left.png`, `front.png`, ...). This crate
//! scans a single folder and renames every entry whose name contains an
//! axis code to the matching face name, keeping the original extension.
//!
//! # Matching
//!
//! - **Case-insensitive**: names are lowercased before matching
//! - **Substring**: `Skybox_PX_2k.jpg` matches `px`
//! - **First match wins**: codes are tried in the order
//!   `nx, px, ny, py, nz, pz`, see [`CubeFace::ALL`]
//!
//! # Conflicts
//!
//! If the target name is already taken, the existing file is moved to
//! `<face>_old<ext>` first. A previous backup with that name is overwritten.
//!
//! # Key functions
//!
//! - [`rename_cubemap_images`]: Scan a folder and rename matching entries
//! - [`rename_cubemap_images_with`]: Same, with options and a per-event callback
//! - [`read_folder_path`]: Prompt for a folder path on an interactive stream

mod error;

pub mod face;
pub mod fs;
pub mod input;
pub mod path;
pub mod rename;

pub use error::{RenameError, RenameResult};
pub use face::CubeFace;
pub use fs::{DiskFs, DryRunFs, FileSystem};
pub use input::{parse_folder_input, read_folder_path};
pub use path::{backup_file_name, split_extension, target_file_name};
pub use rename::{
    RenameEvent, RenameOptions, rename_cubemap_images, rename_cubemap_images_with, rename_entries,
};
