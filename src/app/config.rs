//! Maintenance configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, MaintenanceConfig};

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dirkeep.toml";

/// Load configuration from an explicit file, or from `dirkeep.toml` under `dir` if present.
///
/// Falls back to built-in defaults when no file is found and none was requested.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<MaintenanceConfig, AppError> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(MaintenanceConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
