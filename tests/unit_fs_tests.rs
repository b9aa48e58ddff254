//! # File System Helpers Unit Tests / 文件系统辅助函数单元测试
//!
//! Tests for `infra::fs`.
//!
//! `infra::fs` 的测试。

mod common;

use std::fs;
use suite_runner::infra::fs::{is_directory, write_artifact};

#[cfg(test)]
mod is_directory_tests {
    use super::*;

    #[test]
    fn test_existing_directory() {
        let workspace = common::setup_workspace();
        assert!(is_directory(&common::suites_dir(&workspace)));
    }

    #[test]
    fn test_missing_path_and_plain_file() {
        let workspace = common::setup_workspace();
        let file = workspace.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        assert!(!is_directory(&workspace.path().join("missing")));
        assert!(!is_directory(&file));
    }
}

#[cfg(test)]
mod write_artifact_tests {
    use super::*;

    #[test]
    fn test_creates_nested_directory() {
        let workspace = common::setup_workspace();
        let dir = workspace.path().join("a").join("b");

        let path = write_artifact(&dir, "out.txt", "hello").unwrap();

        assert_eq!(path, dir.join("out.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
