//! Sort a directory's files into per-extension subfolders.

use std::path::Path;

use log::{debug, error, info, warn};

use super::{Preflight, log_scan_failures, preflight};
use crate::domain::extension::has_non_utf8_extension;
use crate::domain::{
    AppError, CollisionPolicy, FileAction, FileFailure, SkipReason, SortConfig, SortOutcome,
    SortReport, SortSummary, SummaryStatus,
};
use crate::ports::FileTree;

/// Execute the sort command.
///
/// Every file below `path` is moved into `path/<extension>/`, creating the
/// bucket on demand. The list of files is fixed before the first move, so
/// buckets created by this run are not walked again. The per-extension counts
/// are written to `config.summary` once all moves have been attempted.
pub fn execute<T: FileTree>(
    tree: &T,
    path: &Path,
    config: &SortConfig,
) -> Result<SortOutcome, AppError> {
    config.validate()?;

    let root = match preflight(tree, path)? {
        Preflight::Ready(root) => root,
        Preflight::Skip(reason) => return Ok(skipped(reason)),
    };

    let scan = tree.scan_files(&root)?;
    log_scan_failures(&scan.failures);
    if scan.files.is_empty() && scan.failures.is_empty() {
        return Ok(skipped(SkipReason::NoFiles { path: root }));
    }

    let snapshot = scan.files;
    let mut summary = SortSummary::new();
    let mut unsorted = Vec::new();
    let mut collisions = Vec::new();
    let mut failures = scan.failures;

    for entry in &snapshot {
        let Some(file_name) = entry.path.file_name() else {
            continue;
        };
        if entry.extension.is_empty() {
            if has_non_utf8_extension(&entry.path) {
                debug!("Extension is not valid UTF-8, leaving in place: {}", entry.path.display());
            } else {
                debug!("No extension, leaving in place: {}", entry.path.display());
            }
            unsorted.push(entry.path.clone());
            continue;
        }
        summary.observe(&entry.extension);

        let bucket = root.join(&entry.extension);
        let destination = bucket.join(file_name);

        if !tree.is_dir(&bucket) {
            if let Err(err) = tree.create_dir_all(&bucket) {
                let failure = FileFailure::new(&bucket, FileAction::CreateDir, &err);
                error!("{}", failure);
                failures.push(failure);
                continue;
            }
            info!("Create new sub folder for extension: {}", entry.extension);
        }

        if tree.exists(&destination) {
            if destination == entry.path {
                continue;
            }
            match config.on_collision {
                CollisionPolicy::Skip => {
                    info!(
                        "Skip {}: {} already exists",
                        entry.path.display(),
                        destination.display()
                    );
                    collisions.push(entry.path.clone());
                    continue;
                }
            }
        }

        match tree.move_file(&entry.path, &destination) {
            Ok(()) => {
                summary.record_move(&entry.extension);
                info!(
                    "Move file: {} into sub folder: {}",
                    file_name.to_string_lossy(),
                    entry.extension
                );
            }
            Err(err) => {
                let failure = FileFailure::new(&entry.path, FileAction::Move, &err);
                if failure.vanished {
                    warn!("{}", failure);
                } else {
                    error!("Sort directory failed: {}", failure);
                }
                failures.push(failure);
            }
        }
    }

    let summary_status = write_summary(tree, &config.summary, &summary);

    Ok(SortOutcome::Completed(SortReport {
        scanned: snapshot.len(),
        summary,
        unsorted,
        collisions,
        failures,
        summary_status,
    }))
}

fn write_summary<T: FileTree>(tree: &T, destination: &Path, summary: &SortSummary) -> SummaryStatus {
    match tree.write_file(destination, summary.to_table().as_bytes()) {
        Ok(()) => {
            info!("Wrote summary of {} extension(s) to {}", summary.rows().count(), destination.display());
            SummaryStatus::Written { path: destination.to_path_buf() }
        }
        Err(err) => {
            let failure = FileFailure::new(destination, FileAction::WriteSummary, &err);
            error!("{}", failure);
            SummaryStatus::Failed(failure)
        }
    }
}

fn skipped(reason: SkipReason) -> SortOutcome {
    error!("{}", reason);
    SortOutcome::Skipped(reason)
}
