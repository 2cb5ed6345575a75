//! taskpad - persistent terminal task list
//!
//! Entry point: set up file logging, load config, open the task store, and
//! launch the TUI.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use taskpad::cli::Cli;
use taskpad::config::Config;
use taskpad::manager::TaskManager;
use taskpad::store::JsonStore;
use taskpad::tui;

/// Set up the file logger.
///
/// The TUI owns stdout, so logs go to a file under the user data dir.
/// Level priority: CLI --log-level, then config file, then INFO.
fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskpad")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            other => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("taskpad.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    // CLI --store overrides the configured tasks file
    let tasks_file = cli.store.unwrap_or(config.storage.tasks_file);
    info!(path = %tasks_file.display(), "Opening task store");

    let store = JsonStore::new(tasks_file);
    // A malformed stored list is fatal here; only a missing file starts empty
    let manager = TaskManager::load(Box::new(store)).context("Failed to load task list")?;

    tui::run(manager).await
}
