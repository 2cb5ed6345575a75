//! taskpad - persistent terminal task list
//!
//! A minimal to-do list: add short text items, toggle them complete, delete
//! them, and see a completion count. The list persists across restarts as a
//! single JSON file.
//!
//! # Modules
//!
//! - [`domain`] - the Task record and id generation
//! - [`store`] - persistence boundary (Store trait + JSON file store)
//! - [`manager`] - the functional core: task list state with write-through saves
//! - [`tui`] - ratatui presentation and event routing
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line flags

pub mod cli;
pub mod config;
pub mod domain;
pub mod manager;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Config, StorageConfig};
pub use domain::{Task, TaskId, next_id};
pub use manager::TaskManager;
pub use store::{JsonStore, Store};
