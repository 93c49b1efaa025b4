//! Sort command implementation.

use std::path::Path;

use crate::domain::{AppError, SortConfig, SortOutcome, SortReport, SummaryStatus};

pub fn run_sort(path: &Path, config: &SortConfig, json: bool) -> Result<i32, AppError> {
    let outcome = crate::app::api::sort_at(path, config)?;

    if json {
        super::print_json(&outcome)?;
    } else {
        print_outcome(&outcome);
    }

    Ok(exit_code(&outcome))
}

pub(super) fn print_outcome(outcome: &SortOutcome) {
    match outcome {
        SortOutcome::Skipped(reason) => println!("ℹ️ {}", reason),
        SortOutcome::Completed(report) => print_report(report),
    }
}

fn print_report(report: &SortReport) {
    println!("✅ Moved {} of {} file(s)", report.moved_count(), report.scanned);
    for (extension, count) in report.summary.rows() {
        println!("  {}: {}", extension, count);
    }
    if !report.unsorted.is_empty() {
        println!("  Left {} file(s) without extension in place", report.unsorted.len());
    }
    if !report.collisions.is_empty() {
        println!("  Skipped {} file(s) already present in their folder:", report.collisions.len());
        for path in &report.collisions {
            println!("    {}", path.display());
        }
    }

    if !report.failures.is_empty() {
        eprintln!("⚠️  {} path(s) could not be sorted:", report.failures.len());
        super::print_failures(&report.failures);
    }

    match &report.summary_status {
        SummaryStatus::Written { path } => println!("  Summary written to {}", path.display()),
        SummaryStatus::Failed(failure) => eprintln!("⚠️  {}", failure),
    }
}

pub(super) fn exit_code(outcome: &SortOutcome) -> i32 {
    match outcome.report() {
        Some(report) if report.has_failures() => 1,
        _ => 0,
    }
}
