// Contract tests for the `bootzip` command line

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn make_valid(root: &Path, name: &str) {
    let folder = root.join(name);
    fs::create_dir_all(folder.join("part0")).unwrap();
    fs::write(folder.join("desc.txt"), "1080 1920 30\np 0 0 part0\n").unwrap();
    fs::write(folder.join("part0/00000.png"), "frame").unwrap();
}

fn bootzip() -> Command {
    let mut cmd = Command::cargo_bin("bootzip").unwrap();
    cmd.env_remove("BOOTZIP_REPRODUCIBLE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_bootzip_requires_directory_argument() {
    bootzip()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_bootzip_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    bootzip()
        .arg(temp_dir.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Directory does not exist:"));
}

#[test]
fn test_bootzip_path_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("bootanimation.zip");
    fs::write(&file, "zip").unwrap();

    bootzip()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Path is not a directory:"));
}

#[test]
fn test_bootzip_no_folders_found() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("unrelated")).unwrap();

    bootzip()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching for bootanimation folders in:"))
        .stdout(predicate::str::contains("No bootanimation folders found."))
        .stdout(predicate::str::contains("Done! Successful: 0, Skipped/Failed: 0"));
}

#[test]
fn test_bootzip_all_valid() {
    let temp_dir = TempDir::new().unwrap();
    make_valid(temp_dir.path(), "bootanimation");
    make_valid(temp_dir.path(), "bootanimation01");

    bootzip()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 bootanimation folder(s):"))
        .stdout(predicate::str::contains("  ✓ Created: bootanimation.zip"))
        .stdout(predicate::str::contains("  ✓ Created: bootanimation01.zip"))
        .stdout(predicate::str::contains("Done! Successful: 2, Skipped/Failed: 0"));

    assert!(temp_dir.path().join("bootanimation.zip").is_file());
    assert!(temp_dir.path().join("bootanimation01.zip").is_file());
}

#[test]
fn test_bootzip_skipped_folder_fails_run() {
    let temp_dir = TempDir::new().unwrap();
    make_valid(temp_dir.path(), "bootanimation");
    fs::create_dir(temp_dir.path().join("bootanimation02")).unwrap();
    fs::create_dir_all(temp_dir.path().join("bootanimation03/part0")).unwrap();

    let output = bootzip().arg(temp_dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("  ✗ Skipped - Missing required: part0/, desc.txt"));
    assert!(stdout.contains("  ✗ Skipped - Missing required: desc.txt"));
    assert!(stdout.contains("Done! Successful: 1, Skipped/Failed: 2"));

    // Processing order: bare folder first, then by number
    let first = stdout.find("Processing: bootanimation\n").unwrap();
    let second = stdout.find("Processing: bootanimation02").unwrap();
    let third = stdout.find("Processing: bootanimation03").unwrap();
    assert!(first < second && second < third);

    assert!(!temp_dir.path().join("bootanimation02.zip").exists());
}

#[test]
fn test_bootzip_json_report() {
    let temp_dir = TempDir::new().unwrap();
    make_valid(temp_dir.path(), "BootAnimation");
    fs::create_dir(temp_dir.path().join("bootanimation5")).unwrap();

    let output = bootzip().arg(temp_dir.path()).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["successful"], 1);
    assert_eq!(report["failed"], 1);
    assert_eq!(report["folders"][0]["name"], "BootAnimation");
    assert_eq!(report["folders"][0]["status"], "created");
    assert_eq!(report["folders"][0]["entries"], 2);
    assert_eq!(report["folders"][1]["status"], "skipped");
    assert_eq!(report["folders"][1]["missing"][0], "part0/");
}

#[test]
fn test_bootzip_resolves_parent_of_missing_component() {
    let temp_dir = TempDir::new().unwrap();
    make_valid(temp_dir.path(), "bootanimation");

    bootzip()
        .arg(temp_dir.path().join("nonexistent").join(".."))
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 bootanimation folder(s):"))
        .stdout(predicate::str::contains("  ✓ Created: bootanimation.zip"));

    assert!(temp_dir.path().join("bootanimation.zip").is_file());
}

#[test]
fn test_bootzip_archive_write_error_continues() {
    let temp_dir = TempDir::new().unwrap();
    make_valid(temp_dir.path(), "bootanimation");
    make_valid(temp_dir.path(), "bootanimation1");
    // A directory where the first archive should go makes its write fail
    fs::create_dir(temp_dir.path().join("bootanimation.zip")).unwrap();

    let output = bootzip().arg(temp_dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("  Error zipping bootanimation: failed to create zip:"));
    assert!(stdout.contains("  ✓ Created: bootanimation1.zip"));
    assert!(stdout.contains("Done! Successful: 1, Skipped/Failed: 1"));

    let error_line = stdout.find("Error zipping bootanimation:").unwrap();
    let created_line = stdout.find("Created: bootanimation1.zip").unwrap();
    assert!(error_line < created_line);

    assert!(temp_dir.path().join("bootanimation.zip").is_dir());
    assert!(temp_dir.path().join("bootanimation1.zip").is_file());
}
