use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::adapters::LocalFileTree;
use crate::domain::{AppError, FileFailure, TreeScan};
use crate::ports::FileTree;

/// Local file tree that fails mutations on selected paths.
#[derive(Default)]
pub struct FaultyFileTree {
    inner: LocalFileTree,
    failing: RefCell<HashSet<PathBuf>>,
    vanishing: RefCell<HashSet<PathBuf>>,
    unreadable: RefCell<Vec<PathBuf>>,
    scans: Cell<usize>,
}

impl FaultyFileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutations touching `path` fail with `PermissionDenied`.
    pub fn fail_on(self, path: impl Into<PathBuf>) -> Self {
        self.failing.borrow_mut().insert(path.into());
        self
    }

    /// Mutations touching `path` fail with `NotFound`, as if it had been removed.
    pub fn vanish_on(self, path: impl Into<PathBuf>) -> Self {
        self.vanishing.borrow_mut().insert(path.into());
        self
    }

    /// Scans leave out everything below `dir` and report it as unreadable.
    pub fn unreadable(self, dir: impl Into<PathBuf>) -> Self {
        self.unreadable.borrow_mut().push(dir.into());
        self
    }

    pub fn scan_count(&self) -> usize {
        self.scans.get()
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.failing.borrow().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        if self.vanishing.borrow().contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"));
        }
        Ok(())
    }
}

impl FileTree for FaultyFileTree {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn is_empty_dir(&self, path: &Path) -> Result<bool, AppError> {
        self.inner.is_empty_dir(path)
    }

    fn scan_files(&self, root: &Path) -> Result<TreeScan, AppError> {
        self.scans.set(self.scans.get() + 1);
        let mut scan = self.inner.scan_files(root)?;
        for dir in self.unreadable.borrow().iter() {
            if dir == root || !dir.starts_with(root) {
                continue;
            }
            scan.files.retain(|entry| !entry.path.starts_with(dir));
            scan.failures.push(FileFailure::scan(dir, "permission denied"));
        }
        Ok(scan)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.check(path)?;
        self.inner.remove_file(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check(path)?;
        self.inner.create_dir_all(path)
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check(from)?;
        self.inner.move_file(from, to)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.check(path)?;
        self.inner.write_file(path, content)
    }
}

/// Write a file whose modification time lies `age_secs` in the past.
pub fn write_with_age(path: &Path, age_secs: u64) {
    fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs)).unwrap();
}
