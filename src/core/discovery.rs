//! Suite file discovery.

use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::core::models::SuiteFile;
use crate::error::{Result, SetupError};

/// Lists the files directly inside `directory` whose name ends with `suffix`.
///
/// The order is whatever the filesystem enumeration yields; nothing is sorted.
/// Subdirectories are not descended into, and entries that are not regular
/// files (after following symlinks) are skipped even when their name matches.
///
/// # Errors
/// [`SetupError::DirectoryAccess`] if `directory` is missing or unreadable.
///
/// 列出 `directory` 下文件名以 `suffix` 结尾的文件，顺序与文件系统枚举顺序一致，不排序。
pub fn discover(directory: &Path, suffix: &str) -> Result<Vec<SuiteFile>> {
    let access_error = |source| SetupError::DirectoryAccess {
        path: directory.to_path_buf(),
        source,
    };

    let entries = fs::read_dir(directory).map_err(access_error)?;
    let mut suites = Vec::new();

    for entry in entries {
        let entry = entry.map_err(access_error)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            trace!(entry = ?file_name, "skipping non UTF-8 file name");
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        let path = directory.join(name);
        if !path.is_file() {
            trace!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        suites.push(SuiteFile::new(path));
    }

    debug!(dir = %directory.display(), found = suites.len(), "discovery finished");
    Ok(suites)
}
