//! Keep a directory's log files within a retention window.

use std::path::Path;

use log::{error, info, warn};

use super::{Preflight, log_scan_failures, preflight};
use crate::domain::extension::name_ends_with;
use crate::domain::{
    AppError, FileAction, FileEntry, FileFailure, PruneConfig, PruneOutcome, PrunePlan,
    PruneReport, SkipReason,
};
use crate::ports::FileTree;

/// Execute the prune command.
///
/// Deletes at most `deletion_threshold` of the oldest files whose name ends
/// with the configured extension, always keeping the newest `window_size`.
/// With `dry_run` the plan is reported and nothing is removed.
pub fn execute<T: FileTree>(
    tree: &T,
    path: &Path,
    config: &PruneConfig,
    dry_run: bool,
) -> Result<PruneOutcome, AppError> {
    config.validate()?;

    let root = match preflight(tree, path)? {
        Preflight::Ready(root) => root,
        Preflight::Skip(reason) => return Ok(skipped(reason)),
    };

    info!("Number of files to keep: {}", config.window_size);
    info!("Number of files to delete: {}", config.deletion_threshold);
    info!("Log extension type is: {}", config.extension);

    let scan = tree.scan_files(&root)?;
    log_scan_failures(&scan.failures);

    let matches: Vec<FileEntry> = scan
        .files
        .into_iter()
        .filter(|entry| name_ends_with(&entry.path, &config.extension))
        .collect();

    // An unreadable subtree may hide matches; report it instead of skipping.
    if matches.is_empty() && scan.failures.is_empty() {
        return Ok(skipped(SkipReason::NoMatchingFiles {
            path: root,
            extension: config.extension.clone(),
        }));
    }

    let plan = PrunePlan::build(matches, config.window_size, config.deletion_threshold);
    let mut report = PruneReport {
        dry_run,
        matched: plan.matched,
        eligible: plan.eligible,
        failures: scan.failures,
        ..Default::default()
    };

    if plan.is_empty() {
        info!(
            "No need to delete files. Current number of files: {} (eligible: {})",
            plan.matched, plan.eligible
        );
        return Ok(PruneOutcome::Completed(report));
    }

    info!(
        "Total files eligible for deletion: {} deletion threshold: {}",
        plan.eligible, config.deletion_threshold
    );

    for entry in plan.to_delete {
        if dry_run {
            info!("Would remove file: [{}]", entry.path.display());
            report.deleted.push(entry.path);
            continue;
        }

        info!("Removing file: [{}]", entry.path.display());
        match tree.remove_file(&entry.path) {
            Ok(()) => report.deleted.push(entry.path),
            Err(err) => {
                let failure = FileFailure::new(&entry.path, FileAction::Delete, &err);
                if failure.vanished {
                    warn!("{}", failure);
                } else {
                    error!("{}", failure);
                }
                report.failures.push(failure);
            }
        }
    }

    Ok(PruneOutcome::Completed(report))
}

fn skipped(reason: SkipReason) -> PruneOutcome {
    error!("{}", reason);
    PruneOutcome::Skipped(reason)
}
