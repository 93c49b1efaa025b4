use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dirkeep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value rejected before any scan.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Directory walk failed for a reason other than a vanished entry.
    #[error("Failed to scan '{}': {}", path.display(), source)]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Logger could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
