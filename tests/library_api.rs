mod common;

use common::{TestContext, entries, write_with_age};
use dirkeep::{
    AppError, FileAction, MaintenanceConfig, PruneConfig, PruneOutcome, SkipReason, SortConfig,
    SortOutcome, SummaryStatus,
};
use serial_test::serial;
use std::fs;

fn sort_config(ctx: &TestContext) -> SortConfig {
    SortConfig { summary: ctx.path("summary.csv"), ..Default::default() }
}

#[test]
fn prune_at_returns_deleted_paths_oldest_first() {
    let ctx = TestContext::new();
    let logs = ctx.dir("logs");
    ctx.log_files(&logs, 6);

    let outcome = dirkeep::prune_at(&logs, &PruneConfig::new(3, 2, "log")).unwrap();
    let report = outcome.report().expect("prune should complete");

    assert_eq!(report.matched, 6);
    assert_eq!(report.eligible, 3);
    assert_eq!(report.deleted_count(), 2);
    assert!(report.deleted[0].ends_with("app-00.log"));
    assert!(report.deleted[1].ends_with("app-01.log"));
    assert!(report.deleted.iter().all(|p| p.is_absolute()));
    assert_eq!(entries(&logs), vec!["app-02.log", "app-03.log", "app-04.log", "app-05.log"]);
}

#[test]
fn prune_deletions_never_exceed_threshold_or_excess() {
    let ctx = TestContext::new();
    let logs = ctx.dir("logs");
    ctx.log_files(&logs, 5);

    for (window, threshold) in [(0, 2), (4, 3), (5, 5), (2, 10)] {
        let outcome = dirkeep::prune_preview_at(&logs, &PruneConfig::new(window, threshold, "log"))
            .unwrap();
        let report = outcome.report().unwrap();
        assert!(report.deleted_count() <= threshold);
        assert!(report.deleted_count() <= 5usize.saturating_sub(window));
    }
    assert_eq!(entries(&logs).len(), 5);
}

#[test]
fn prune_at_reports_empty_directory() {
    let ctx = TestContext::new();
    let logs = ctx.dir("logs");

    let outcome = dirkeep::prune_at(&logs, &PruneConfig::default()).unwrap();
    assert_eq!(outcome, PruneOutcome::Skipped(SkipReason::DirectoryEmpty { path: logs }));
}

#[test]
fn prune_at_rejects_empty_path() {
    let err = dirkeep::prune_at("", &PruneConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfig(_)));
}

#[test]
fn prune_suffix_match_is_exact_and_case_sensitive() {
    let ctx = TestContext::new();
    let logs = ctx.dir("logs");
    write_with_age(&logs.join("upper.LOG"), 10_000);
    write_with_age(&logs.join("old.log"), 5_000);
    write_with_age(&logs.join("new.log"), 10);

    let outcome = dirkeep::prune_at(&logs, &PruneConfig::new(1, 5, "log")).unwrap();

    assert_eq!(outcome.report().unwrap().matched, 2);
    assert!(logs.join("upper.LOG").exists());
    assert!(!logs.join("old.log").exists());
}

#[test]
fn sort_at_matches_documented_scenario() {
    let ctx = TestContext::new();
    let mixed = ctx.dir("mixed");
    ctx.files(&mixed, &["a.csv", "b.csv", "c.mat", "d"]);

    let outcome = dirkeep::sort_at(&mixed, &sort_config(&ctx)).unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.summary.rows().collect::<Vec<_>>(), vec![("csv", 2), ("mat", 1)]);
    assert_eq!(report.unsorted, vec![mixed.join("d")]);
    assert!(matches!(report.summary_status, SummaryStatus::Written { .. }));
    assert_eq!(fs::read_to_string(ctx.path("summary.csv")).unwrap(), "csv,2\nmat,1\n");
}

#[test]
fn sort_every_file_ends_in_bucket_or_collides() {
    let ctx = TestContext::new();
    let mixed = ctx.dir("mixed");
    ctx.files(&mixed, &["a.txt", "nested/a.txt", "nested/b.txt", "c.md", ".hidden"]);

    let outcome = dirkeep::sort_at(&mixed, &sort_config(&ctx)).unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.summary.count("txt"), Some(2));
    assert_eq!(report.summary.count("md"), Some(1));
    assert_eq!(report.collisions, vec![mixed.join("nested/a.txt")]);
    assert!(mixed.join("nested/a.txt").is_file());
    assert!(mixed.join("txt/a.txt").is_file());
    assert!(mixed.join("txt/b.txt").is_file());
    assert!(!mixed.join("nested/b.txt").exists());
    assert!(mixed.join(".hidden").is_file());
}

#[test]
fn sort_reports_failed_summary_separately() {
    let ctx = TestContext::new();
    let mixed = ctx.dir("mixed");
    ctx.files(&mixed, &["a.csv"]);
    let blocked = ctx.dir("blocked.csv");

    let config = SortConfig { summary: blocked.clone(), ..Default::default() };
    let outcome = dirkeep::sort_at(&mixed, &config).unwrap();
    let report = outcome.report().unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.moved_count(), 1);
    match &report.summary_status {
        SummaryStatus::Failed(failure) => {
            assert_eq!(failure.action, FileAction::WriteSummary);
            assert_eq!(failure.path, blocked);
        }
        other => panic!("expected summary failure, got {:?}", other),
    }
}

#[test]
fn sort_at_missing_directory_is_skipped() {
    let ctx = TestContext::new();
    let outcome = dirkeep::sort_at(ctx.path("absent"), &sort_config(&ctx)).unwrap();
    assert!(matches!(outcome, SortOutcome::Skipped(SkipReason::PathMissing { .. })));
}

#[test]
fn maintain_runs_prune_before_sort() {
    let ctx = TestContext::new();
    let logs = ctx.dir("logs");
    ctx.log_files(&logs, 2);

    let mut config = MaintenanceConfig::default();
    config.prune.path = Some(logs.clone());
    config.prune.window_size = 0;
    config.prune.deletion_threshold = 5;
    config.sort.path = Some(logs.clone());
    config.sort.summary = ctx.path("summary.csv");

    let run = dirkeep::maintain(&config, false).unwrap();

    assert_eq!(run.prune.as_ref().and_then(PruneOutcome::report).unwrap().deleted_count(), 2);
    assert!(matches!(run.sort, Some(SortOutcome::Skipped(SkipReason::DirectoryEmpty { .. }))));
}

#[test]
#[serial]
fn load_config_reads_working_directory_file() {
    let ctx = TestContext::new();
    ctx.write_config("[prune]\nwindow_size = 4\nlog_extension = \"txt\"\n");

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(ctx.work_dir()).unwrap();
    let result = dirkeep::load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.prune.window_size, 4);
    assert_eq!(config.prune.extension, "txt");
}

#[test]
#[serial]
fn load_config_without_file_uses_defaults() {
    let ctx = TestContext::new();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(ctx.work_dir()).unwrap();
    let result = dirkeep::load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().prune.deletion_threshold, 1);
}
