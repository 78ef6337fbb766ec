//! Runs the `cubemap-rename` binary and checks its output and exit status.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn cubemap_rename() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cubemap-rename"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_renames_and_prints_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("left.png"), "old").unwrap();
    fs::write(dir.path().join("sky_nx.png"), "new").unwrap();

    let output = cubemap_rename().arg(dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("sky_nx.png -> left.png"), "{stdout}");
    assert!(stdout.contains("backed up to"), "{stdout}");
    assert!(stdout.ends_with("1 renamed, 1 backed up\n"), "{stdout}");
    assert_eq!(fs::read(dir.path().join("left.png")).unwrap(), b"new");
    assert_eq!(fs::read(dir.path().join("left_old.png")).unwrap(), b"old");
}

#[test]
fn test_dry_run_prefixes_lines_and_keeps_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("sky_px.png"), "face").unwrap();

    let output = cubemap_rename()
        .arg("--dry-run")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert_eq!(
        stdout,
        "[dry run] sky_px.png -> right.png\n[dry run] 1 renamed, 0 backed up\n"
    );
    assert!(dir.path().join("sky_px.png").exists());
    assert!(!dir.path().join("right.png").exists());
}

#[test]
fn test_missing_folder_exits_with_failure() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = cubemap_rename().arg(&missing).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a valid folder"), "{stderr}");
}

#[test]
fn test_prompts_for_folder_on_stdin() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cube_PZ.jpg"), "face").unwrap();

    let mut child = cubemap_rename()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let line = format!("\"{}\"\n", dir.path().display());
    child
        .stdin
        .take()
        .unwrap()
        .write_all(line.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Enter folder path: "));
    assert!(dir.path().join("front.jpg").exists());
}
