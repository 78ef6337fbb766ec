//! Rename cubemap face images in a folder.
//!
//! Run: `cargo run -p cubemap-rename -- [--dry-run] <folder>`
//!
//! Without a folder argument the path is read interactively from stdin.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use cubemap_rename::{RenameEvent, RenameOptions, read_folder_path, rename_cubemap_images_with};

/// Rename cubemap images from axis codes (nx, px, ny, py, nz, pz) to face
/// names (left, right, bottom, top, back, front).
#[derive(Parser)]
#[command(name = "cubemap-rename")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder containing the cubemap images. Prompts when omitted.
    folder: Option<PathBuf>,

    /// Report what would be renamed without touching any file.
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> cubemap_rename::RenameResult<()> {
    let folder = match cli.folder {
        Some(folder) => folder,
        None => read_folder_path(io::stdin().lock(), io::stdout())?,
    };

    let options = RenameOptions {
        dry_run: cli.dry_run,
    };
    let prefix = if options.dry_run { "[dry run] " } else { "" };

    let events = rename_cubemap_images_with(&folder, options, |event| {
        println!("{prefix}{event}");
    })?;

    let renamed = events
        .iter()
        .filter(|e| matches!(e, RenameEvent::Renamed { .. }))
        .count();
    let backed_up = events.len() - renamed;
    println!("{prefix}{renamed} renamed, {backed_up} backed up");

    Ok(())
}
