//! Shared testing utilities for dirkeep integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dirkeep` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dirkeep").expect("Failed to locate dirkeep binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Create a directory under the work directory.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create `count` log files named `app-NN.log`; `app-00.log` is the oldest.
    pub fn log_files(&self, dir: &Path, count: usize) {
        for i in 0..count {
            write_with_age(&dir.join(format!("app-{:02}.log", i)), (count - i) as u64 * 60);
        }
    }

    /// Create files relative to `dir`, making parent directories as needed.
    pub fn files(&self, dir: &Path, names: &[&str]) {
        for name in names {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            fs::write(&path, name).expect("Failed to write file");
        }
    }

    /// Write `dirkeep.toml` into the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("dirkeep.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }
}

/// Write a file whose modification time lies `age_secs` in the past.
pub fn write_with_age(path: &Path, age_secs: u64) {
    fs::write(path, path.to_string_lossy().as_bytes()).expect("Failed to write file");
    let file = fs::File::options().write(true).open(path).expect("Failed to open file");
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
        .expect("Failed to set modification time");
}

/// Names of the entries directly inside `dir`, sorted.
#[allow(dead_code)]
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
