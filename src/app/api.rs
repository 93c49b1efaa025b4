//! API Facade for the application.
//!
//! These functions run the commands against the local filesystem.

use std::path::Path;

use crate::adapters::LocalFileTree;
use crate::app::commands::{maintain, prune, sort};

pub use crate::app::commands::maintain::MaintenanceRun;
pub use crate::domain::{
    AppError, CollisionPolicy, FileAction, FileFailure, MaintenanceConfig, PruneConfig,
    PruneOutcome, PruneReport, SkipReason, SortConfig, SortOutcome, SortReport, SortSummary,
    SummaryStatus,
};

/// Load configuration from `config`, or from `dirkeep.toml` in the current directory.
pub fn load_config(config: Option<&Path>) -> Result<MaintenanceConfig, AppError> {
    crate::app::config::load_config(config, &std::env::current_dir()?)
}

/// Delete the oldest log files under `path` that fall outside the retention window.
pub fn prune_at(path: impl AsRef<Path>, config: &PruneConfig) -> Result<PruneOutcome, AppError> {
    prune::execute(&LocalFileTree, path.as_ref(), config, false)
}

/// Report which files `prune_at` would delete without deleting them.
pub fn prune_preview_at(
    path: impl AsRef<Path>,
    config: &PruneConfig,
) -> Result<PruneOutcome, AppError> {
    prune::execute(&LocalFileTree, path.as_ref(), config, true)
}

/// Sort the files under `path` into per-extension subfolders and write the summary table.
pub fn sort_at(path: impl AsRef<Path>, config: &SortConfig) -> Result<SortOutcome, AppError> {
    sort::execute(&LocalFileTree, path.as_ref(), config)
}

/// Prune `[prune].path` and then sort `[sort].path`, whichever are configured.
pub fn maintain(config: &MaintenanceConfig, dry_run: bool) -> Result<MaintenanceRun, AppError> {
    maintain::execute(&LocalFileTree, config, dry_run)
}
