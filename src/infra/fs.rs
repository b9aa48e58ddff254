//! # File System Operations Module / 文件系统操作模块
//!
//! Small helpers for writing report artifacts.
//!
//! 用于写出报告文件的小型辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `dir/file_name`, creating `dir` first if needed.
///
/// # Returns
/// The path of the written file.
pub fn write_artifact(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

    let path = dir.join(file_name);
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}

/// Checks if a path is an existing directory (following symlinks).
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}
