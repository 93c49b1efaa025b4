pub mod maintain;
pub mod prune;
pub mod sort;

use std::path::{Path, PathBuf};

use log::error;

use crate::domain::{AppError, FileFailure, SkipReason};
use crate::ports::FileTree;

/// Result of the shared directory precondition checks.
#[derive(Debug)]
pub(crate) enum Preflight {
    /// Absolute path of a non-empty directory.
    Ready(PathBuf),
    Skip(SkipReason),
}

/// Check that `path` names an existing, non-empty directory.
///
/// A malformed path is a configuration error; a missing or empty directory is
/// a skip, not an error.
pub(crate) fn preflight<T: FileTree>(tree: &T, path: &Path) -> Result<Preflight, AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::config_error("path must not be empty"));
    }
    if !tree.exists(path) {
        return Ok(Preflight::Skip(SkipReason::PathMissing { path: path.to_path_buf() }));
    }
    if !tree.is_dir(path) {
        return Err(AppError::config_error(format!("{} is not a directory", path.display())));
    }
    if tree.is_empty_dir(path)? {
        return Ok(Preflight::Skip(SkipReason::DirectoryEmpty { path: path.to_path_buf() }));
    }
    Ok(Preflight::Ready(std::path::absolute(path)?))
}

/// Log the entries a scan could not read. They stay in the run's report.
pub(crate) fn log_scan_failures(failures: &[FileFailure]) {
    for failure in failures {
        error!("{}", failure);
    }
}
