//! Logger setup for the CLI entry point.

use std::fs::File;
use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Target};
use log::Level;

use crate::domain::{AppError, LogType, LoggingConfig};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the process logger described by `config`.
///
/// A configured destination file is truncated.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let mut builder = Builder::new();
    builder.filter_level(config.level);

    let log_type = config.log_type;
    builder.format(move |buf, record| {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_line(log_type, &timestamp, record.level(), &record.args().to_string());
        writeln!(buf, "{}", line)
    });

    match &config.destination {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                AppError::Logging(format!("cannot open log file {}: {}", path.display(), e))
            })?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder.try_init().map_err(|e| AppError::Logging(e.to_string()))
}

fn format_line(log_type: LogType, timestamp: &str, level: Level, message: &str) -> String {
    match log_type {
        LogType::Log => format!("{} {} {}", timestamp, level, message),
        LogType::Csv => {
            format!("{},{},\"{}\"", timestamp, level, message.replace('"', "\"\""))
        }
    }
}
