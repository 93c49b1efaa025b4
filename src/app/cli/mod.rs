//! CLI Adapter.

mod maintain;
mod prune;
mod sort;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::adapters::init_logging;
use crate::domain::{AppError, FileFailure};

#[derive(Parser)]
#[command(name = "dirkeep")]
#[command(version)]
#[command(
    about = "Prune old log files and sort directories into per-extension folders",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./dirkeep.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete the oldest log files beyond the retention window
    #[clap(visible_alias = "p")]
    Prune {
        /// Directory holding the log files
        path: PathBuf,
        /// Number of newest log files to keep
        #[arg(short, long, allow_hyphen_values = true)]
        window_size: Option<usize>,
        /// Maximum number of files to delete in this run
        #[arg(short, long, allow_hyphen_values = true)]
        deletion_threshold: Option<usize>,
        /// File name suffix selecting log files (no leading dot)
        #[arg(short, long)]
        extension: Option<String>,
        /// Show which files would be deleted without deleting them
        #[arg(long)]
        dry_run: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move files into subfolders named after their extension
    #[clap(visible_alias = "s")]
    Sort {
        /// Directory to sort
        path: PathBuf,
        /// Where to write the extension,count summary table
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prune [prune].path, then sort [sort].path from the configuration
    #[clap(visible_alias = "m")]
    Maintain {
        /// Show which log files would be deleted without deleting them
        #[arg(long)]
        dry_run: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let mut config = crate::app::api::load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Prune { path, window_size, deletion_threshold, extension, dry_run, json } => {
            if let Some(window_size) = window_size {
                config.prune.window_size = window_size;
            }
            if let Some(deletion_threshold) = deletion_threshold {
                config.prune.deletion_threshold = deletion_threshold;
            }
            if let Some(extension) = extension {
                config.prune.extension = extension;
            }
            prune::run_prune(&path, &config.prune, dry_run, json)
        }
        Commands::Sort { path, summary, json } => {
            if let Some(summary) = summary {
                config.sort.summary = summary;
            }
            sort::run_sort(&path, &config.sort, json)
        }
        Commands::Maintain { dry_run, json } => maintain::run_maintain(&config, dry_run, json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{}", rendered);
    Ok(())
}

fn print_failures(failures: &[FileFailure]) {
    for failure in failures {
        eprintln!("  • {}", failure);
    }
}
