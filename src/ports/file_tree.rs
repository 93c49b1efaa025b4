//! Filesystem operations used by the maintenance commands.
//!
//! Scanning returns `AppError` only when the root itself cannot be walked;
//! unreadable entries below it come back inside the `TreeScan`. Per-file
//! mutations return the raw `io::Error` so callers can record it against the
//! offending path and keep going.

use std::io;
use std::path::Path;

use crate::domain::{AppError, TreeScan};

/// Port for the directory tree a command maintains.
pub trait FileTree {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether a directory has no entries at all.
    fn is_empty_dir(&self, path: &Path) -> Result<bool, AppError>;

    /// Snapshot every regular file below `root`, recursively.
    ///
    /// Entries that vanish while the walk is in progress are left out.
    /// Entries that cannot be read are left out and listed in `failures`.
    fn scan_files(&self, root: &Path) -> Result<TreeScan, AppError>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Move a file. The destination must not exist.
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Write content to a file, truncating it and creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}
