//! CLI definition
//!
//! Flags only - the task list itself has no command surface, everything
//! happens inside the TUI.

use std::path::PathBuf;

use clap::Parser;

/// taskpad - persistent terminal task list
#[derive(Debug, Parser)]
#[command(
    name = "tp",
    about = "Persistent terminal task list",
    version,
    after_help = "Logs are written to: ~/.local/share/taskpad/logs/taskpad.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path of the tasks file (overrides config)
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Log level (TRACE/DEBUG/INFO/WARN/ERROR)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["tp"]);
        assert!(cli.config.is_none());
        assert!(cli.store.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_parse_store_override() {
        let cli = Cli::parse_from(["tp", "--store", "/tmp/tasks.json"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/tasks.json")));
    }

    #[test]
    fn test_cli_parse_log_level() {
        let cli = Cli::parse_from(["tp", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
