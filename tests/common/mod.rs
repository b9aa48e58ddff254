// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Creates a temporary workspace with an empty `suites` directory.
pub fn setup_workspace() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(temp_dir.path().join("suites")).expect("Failed to create suites directory");
    temp_dir
}

pub fn suites_dir(workspace: &TempDir) -> PathBuf {
    workspace.path().join("suites")
}

/// Writes a POSIX shell suite that prints `tap` and exits with `exit_code`.
/// Suites written this way run with the command `sh`.
pub fn write_sh_suite(dir: &Path, name: &str, tap: &[&str], exit_code: i32) -> PathBuf {
    let mut script = String::new();
    for line in tap {
        script.push_str(&format!("echo '{}'\n", line));
    }
    script.push_str(&format!("exit {}\n", exit_code));

    let path = dir.join(name);
    fs::write(&path, script).expect("Failed to write suite");
    path
}

/// A suite whose cases all pass.
pub fn write_passing_suite(dir: &Path, name: &str) -> PathBuf {
    write_sh_suite(
        dir,
        name,
        &["TAP version 13", "ok 1 - first case", "ok 2 - second case", "1..2"],
        0,
    )
}

/// A suite with exactly one failing case.
pub fn write_failing_suite(dir: &Path, name: &str) -> PathBuf {
    write_sh_suite(
        dir,
        name,
        &["TAP version 13", "ok 1 - works", "not ok 2 - breaks", "1..2"],
        1,
    )
}

/// Writes a config file into the workspace and returns its path.
pub fn write_config(workspace: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = workspace.path().join(file_name);
    fs::write(&path, content).expect("Failed to write config");
    path
}
