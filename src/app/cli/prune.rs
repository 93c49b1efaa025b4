//! Prune command implementation.

use std::path::Path;

use crate::domain::{AppError, PruneConfig, PruneOutcome, PruneReport};

pub fn run_prune(
    path: &Path,
    config: &PruneConfig,
    dry_run: bool,
    json: bool,
) -> Result<i32, AppError> {
    let outcome = if dry_run {
        crate::app::api::prune_preview_at(path, config)?
    } else {
        crate::app::api::prune_at(path, config)?
    };

    if json {
        super::print_json(&outcome)?;
    } else {
        print_outcome(&outcome);
    }

    Ok(exit_code(&outcome))
}

pub(super) fn print_outcome(outcome: &PruneOutcome) {
    match outcome {
        PruneOutcome::Skipped(reason) => println!("ℹ️ {}", reason),
        PruneOutcome::Completed(report) => print_report(report),
    }
}

fn print_report(report: &PruneReport) {
    if report.deleted.is_empty() && !report.has_failures() {
        println!(
            "✅ No files needed deletion ({} matching, {} beyond window)",
            report.matched, report.eligible
        );
        return;
    }

    if report.dry_run {
        println!("Would delete {} file(s):", report.deleted_count());
    } else {
        println!("✅ Deleted {} file(s):", report.deleted_count());
    }
    for path in &report.deleted {
        println!("  {}", path.display());
    }

    if report.has_failures() {
        eprintln!("⚠️  {} path(s) could not be processed:", report.failures.len());
        super::print_failures(&report.failures);
    }
}

pub(super) fn exit_code(outcome: &PruneOutcome) -> i32 {
    match outcome.report() {
        Some(report) if report.has_failures() => 1,
        _ => 0,
    }
}
