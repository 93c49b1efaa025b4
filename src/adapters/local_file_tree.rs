//! `FileTree` implementation backed by the local filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::domain::{AppError, FileEntry, FileFailure, TreeScan};
use crate::ports::FileTree;

/// Local filesystem adapter. Walks are ordered by file name within each directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileTree;

impl FileTree for LocalFileTree {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_empty_dir(&self, path: &Path) -> Result<bool, AppError> {
        let mut entries = fs::read_dir(path)?;
        Ok(entries.next().is_none())
    }

    fn scan_files(&self, root: &Path) -> Result<TreeScan, AppError> {
        let mut scan = TreeScan::default();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(PathBuf::from).unwrap_or_else(|| root.to_path_buf());
                    if err.depth() == 0 {
                        return Err(AppError::Scan { path, source: err });
                    }
                    match err.io_error() {
                        Some(io_err) => skip_entry(&mut scan, path, io_err),
                        None => scan.failures.push(FileFailure::scan(path, err.to_string())),
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.metadata().map_err(io::Error::from).and_then(|m| m.modified()) {
                Ok(modified) => scan.files.push(FileEntry::new(entry.into_path(), modified)),
                Err(err) => skip_entry(&mut scan, entry.into_path(), &err),
            }
        }

        debug!(
            "Scanned {} file(s) under {}, {} unreadable",
            scan.files.len(),
            root.display(),
            scan.failures.len()
        );
        Ok(scan)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        match fs::rename(from, to) {
            Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
                debug!("Falling back to copy for {} -> {}", from.display(), to.display());
                fs::copy(from, to)?;
                fs::remove_file(from)
            }
            result => result,
        }
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }
}

/// Leave an entry below the root out of the scan. Vanished entries are only logged.
fn skip_entry(scan: &mut TreeScan, path: PathBuf, err: &io::Error) {
    if err.kind() == io::ErrorKind::NotFound {
        warn!("Entry vanished during scan: {}", path.display());
        return;
    }
    warn!("Skipping unreadable entry {}: {}", path.display(), err);
    scan.failures.push(FileFailure::scan(path, err.to_string()));
}
