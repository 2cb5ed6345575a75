//! Task persistence
//!
//! The whole task list lives in a single JSON file, fully overwritten on
//! every save. The [`Store`] trait is the seam for tests - the manager is
//! written against the trait, not the file.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, info};

use crate::domain::Task;

/// Persistence boundary for the task list
pub trait Store {
    /// Read the stored task list.
    ///
    /// A missing file yields an empty list; a present-but-malformed file is
    /// an error (the stored data is user state - failing fast beats silently
    /// replacing it with an empty list).
    fn load(&self) -> Result<Vec<Task>>;

    /// Serialize `tasks` to storage, fully overwriting the previous value.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// File-backed store holding the list as one JSON array
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(?path, "JsonStore::new");
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "JsonStore::load: no stored list, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .context(format!("Failed to read task list from {}", self.path.display()))?;

        let tasks: Vec<Task> = serde_json::from_str(&content)
            .context(format!("Malformed task list in {}", self.path.display()))?;

        info!(count = tasks.len(), path = ?self.path, "Loaded task list");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let json = serde_json::to_string(tasks)?;
        fs::write(&self.path, json)
            .context(format!("Failed to write task list to {}", self.path.display()))?;

        debug!(count = tasks.len(), "JsonStore::save: list written");
        Ok(())
    }
}
