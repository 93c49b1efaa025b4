use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::extension::extension_of;
use super::report::FileFailure;

/// A file observed by one scan. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
    /// Empty when the file name has no extension.
    pub extension: String,
}

impl FileEntry {
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        let extension = extension_of(&path).unwrap_or_default().to_string();
        Self { path, modified, extension }
    }

    /// Final path component as UTF-8, lossy.
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }
}

/// Files found by one walk, plus the subtrees it could not read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeScan {
    pub files: Vec<FileEntry>,
    pub failures: Vec<FileFailure>,
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
