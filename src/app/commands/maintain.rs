//! Run the configured maintenance steps in order: prune first, then sort.

use log::info;
use serde::Serialize;

use crate::domain::{AppError, MaintenanceConfig, PruneOutcome, SortOutcome};
use crate::ports::FileTree;

/// Outcomes of the steps that had a configured path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceRun {
    pub prune: Option<PruneOutcome>,
    pub sort: Option<SortOutcome>,
}

impl MaintenanceRun {
    pub fn has_failures(&self) -> bool {
        let prune_failed =
            self.prune.as_ref().and_then(PruneOutcome::report).is_some_and(|r| r.has_failures());
        let sort_failed =
            self.sort.as_ref().and_then(SortOutcome::report).is_some_and(|r| r.has_failures());
        prune_failed || sort_failed
    }
}

/// Execute the maintain command.
///
/// A step without a configured path is left out. A configuration error in
/// either step aborts before the sort step starts.
pub fn execute<T: FileTree>(
    tree: &T,
    config: &MaintenanceConfig,
    dry_run: bool,
) -> Result<MaintenanceRun, AppError> {
    config.validate()?;
    if config.prune.path.is_none() && config.sort.path.is_none() {
        return Err(AppError::config_error(
            "maintain needs [prune].path or [sort].path in the configuration",
        ));
    }

    let mut run = MaintenanceRun::default();

    if let Some(path) = &config.prune.path {
        info!("Pruning {}", path.display());
        run.prune = Some(super::prune::execute(tree, path, &config.prune, dry_run)?);
    }

    if let Some(path) = &config.sort.path {
        info!("Sorting {}", path.display());
        run.sort = Some(super::sort::execute(tree, path, &config.sort)?);
    }

    Ok(run)
}
