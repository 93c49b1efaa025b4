//! dirkeep: keep log directories within a retention window and sort mixed
//! directories into per-extension folders.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api;
pub use app::api::{load_config, maintain, prune_at, prune_preview_at, sort_at};
pub use app::commands::maintain::MaintenanceRun;
pub use domain::{
    AppError, CollisionPolicy, FileAction, FileFailure, LogType, LoggingConfig,
    MaintenanceConfig, PruneConfig, PruneOutcome, PruneReport, SkipReason, SortConfig,
    SortOutcome, SortReport, SortSummary, SummaryStatus,
};
