//! Maintain command implementation.

use crate::domain::{AppError, MaintenanceConfig};

pub fn run_maintain(config: &MaintenanceConfig, dry_run: bool, json: bool) -> Result<i32, AppError> {
    let run = crate::app::api::maintain(config, dry_run)?;

    if json {
        super::print_json(&run)?;
    } else {
        if let Some(outcome) = &run.prune {
            super::prune::print_outcome(outcome);
        }
        if let Some(outcome) = &run.sort {
            super::sort::print_outcome(outcome);
        }
    }

    let prune_code = run.prune.as_ref().map_or(0, super::prune::exit_code);
    let sort_code = run.sort.as_ref().map_or(0, super::sort::exit_code);
    Ok(prune_code.max(sort_code))
}
