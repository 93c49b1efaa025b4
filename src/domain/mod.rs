pub mod configuration;
pub mod error;
pub mod extension;
pub mod file_entry;
pub mod prune_plan;
pub mod report;
pub mod summary;

pub use configuration::{
    CollisionPolicy, LogType, LoggingConfig, MaintenanceConfig, PruneConfig, SortConfig,
};
pub use error::AppError;
pub use file_entry::{FileEntry, TreeScan};
pub use prune_plan::PrunePlan;
pub use report::{
    FileAction, FileFailure, PruneOutcome, PruneReport, SkipReason, SortOutcome, SortReport,
    SummaryStatus,
};
pub use summary::SortSummary;
