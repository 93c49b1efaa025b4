//! Maintenance configuration domain models.

use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::extension::validate_extension_filter;

/// Configuration loaded from `dirkeep.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaintenanceConfig {
    /// Log retention settings.
    #[serde(default)]
    pub prune: PruneConfig,
    /// Extension sorting settings.
    #[serde(default)]
    pub sort: SortConfig,
    /// Logger settings for the CLI entry point.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MaintenanceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.prune.validate()?;
        self.sort.validate()?;
        Ok(())
    }
}

/// Retention window for log pruning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PruneConfig {
    /// Directory pruned by `maintain`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Number of newest matching files that are always kept.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Maximum number of files deleted per run.
    #[serde(default = "default_deletion_threshold")]
    pub deletion_threshold: usize,
    /// File name suffix selecting log files, without a leading dot.
    #[serde(default = "default_log_extension", rename = "log_extension")]
    pub extension: String,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            path: None,
            window_size: default_window_size(),
            deletion_threshold: default_deletion_threshold(),
            extension: default_log_extension(),
        }
    }
}

impl PruneConfig {
    pub fn new(window_size: usize, deletion_threshold: usize, extension: impl Into<String>) -> Self {
        Self { path: None, window_size, deletion_threshold, extension: extension.into() }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_extension_filter(&self.extension).map_err(AppError::InvalidConfig)
    }
}

fn default_window_size() -> usize {
    10
}

fn default_deletion_threshold() -> usize {
    1
}

fn default_log_extension() -> String {
    "log".to_string()
}

/// What to do when a file's destination inside its bucket already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Leave the source where it is, uncounted, without reporting an error.
    #[default]
    Skip,
}

/// Extension sorting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    /// Directory sorted by `maintain`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Destination of the `extension,count` summary table.
    #[serde(default = "default_summary_path")]
    pub summary: PathBuf,
    #[serde(default)]
    pub on_collision: CollisionPolicy,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self { path: None, summary: default_summary_path(), on_collision: CollisionPolicy::Skip }
    }
}

impl SortConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.summary.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("summary must not be empty".to_string()));
        }
        Ok(())
    }
}

pub fn default_summary_path() -> PathBuf {
    PathBuf::from("summary.csv")
}

/// Line format used by the logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    /// `<timestamp> <LEVEL> <message>`
    #[default]
    Log,
    /// `<timestamp>,<LEVEL>,"<message>"`
    Csv,
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub log_type: LogType,
    #[serde(default = "default_level")]
    pub level: LevelFilter,
    /// Log file, truncated at startup. Logs go to stderr when unset.
    #[serde(default)]
    pub destination: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { log_type: LogType::Log, level: default_level(), destination: None }
    }
}

fn default_level() -> LevelFilter {
    LevelFilter::Info
}
