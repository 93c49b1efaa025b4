//! Structured results returned by the maintenance operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::SortSummary;

/// Why an operation stopped before mutating anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    PathMissing { path: PathBuf },
    DirectoryEmpty { path: PathBuf },
    NoMatchingFiles { path: PathBuf, extension: String },
    NoFiles { path: PathBuf },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::PathMissing { path } => {
                write!(f, "Path does not exist: {}", path.display())
            }
            SkipReason::DirectoryEmpty { path } => {
                write!(f, "Directory is empty: {}", path.display())
            }
            SkipReason::NoMatchingFiles { path, extension } => write!(
                f,
                "Directory {} does not have any files to clean (extension '{}')",
                path.display(),
                extension
            ),
            SkipReason::NoFiles { path } => {
                write!(f, "Directory {} does not have files to sort", path.display())
            }
        }
    }
}

/// Filesystem action that failed for a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    Scan,
    Delete,
    Move,
    CreateDir,
    WriteSummary,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileAction::Scan => "scan",
            FileAction::Delete => "delete",
            FileAction::Move => "move",
            FileAction::CreateDir => "create directory",
            FileAction::WriteSummary => "write summary",
        };
        f.write_str(label)
    }
}

/// A per-file failure that did not abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub action: FileAction,
    pub message: String,
    /// The path disappeared between scan and action.
    pub vanished: bool,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, action: FileAction, err: &io::Error) -> Self {
        Self {
            path: path.into(),
            action,
            message: err.to_string(),
            vanished: err.kind() == io::ErrorKind::NotFound,
        }
    }

    /// Failure for an entry the walk could not read.
    pub fn scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            action: FileAction::Scan,
            message: message.into(),
            vanished: false,
        }
    }
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {} {}: {}", self.action, self.path.display(), self.message)
    }
}

/// Result of a prune run that got past its preconditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub dry_run: bool,
    pub matched: usize,
    pub eligible: usize,
    /// Deleted paths, or paths that would be deleted in a dry run.
    pub deleted: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl PruneReport {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PruneOutcome {
    Skipped(SkipReason),
    Completed(PruneReport),
}

impl PruneOutcome {
    pub fn report(&self) -> Option<&PruneReport> {
        match self {
            PruneOutcome::Completed(report) => Some(report),
            PruneOutcome::Skipped(_) => None,
        }
    }
}

/// Whether the summary table reached its destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SummaryStatus {
    Written { path: PathBuf },
    Failed(FileFailure),
}

impl SummaryStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, SummaryStatus::Written { .. })
    }
}

/// Result of a sort run that got past its preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortReport {
    pub scanned: usize,
    pub summary: SortSummary,
    /// Files without an extension, left in place.
    pub unsorted: Vec<PathBuf>,
    /// Files left in place because their destination already existed.
    pub collisions: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub summary_status: SummaryStatus,
}

impl SortReport {
    pub fn moved_count(&self) -> usize {
        self.summary.total()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty() || !self.summary_status.is_written()
    }

    pub fn summary_path(&self) -> Option<&Path> {
        match &self.summary_status {
            SummaryStatus::Written { path } => Some(path.as_path()),
            SummaryStatus::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SortOutcome {
    Skipped(SkipReason),
    Completed(SortReport),
}

impl SortOutcome {
    pub fn report(&self) -> Option<&SortReport> {
        match self {
            SortOutcome::Completed(report) => Some(report),
            SortOutcome::Skipped(_) => None,
        }
    }
}
