//! Task list state manager - the functional core
//!
//! Owns the in-memory task list and the pending-input text, and exposes the
//! four mutations (set pending input, add, toggle, delete) plus the derived
//! counts. Every observed change to the list is written through to the
//! injected [`Store`] before the call returns, so the durable copy never
//! lags the in-memory one.

use eyre::Result;
use tracing::{debug, info};

use crate::domain::{Task, TaskId, next_id};
use crate::store::Store;

/// In-memory task list with write-through persistence
pub struct TaskManager {
    /// Ordered task list, insertion order = display order
    tasks: Vec<Task>,
    /// Text the user is composing, not yet committed and never persisted
    pending_input: String,
    /// Persistence boundary
    store: Box<dyn Store>,
}

impl TaskManager {
    /// Initialize from whatever the store holds.
    ///
    /// A store with no saved list yields an empty manager; a malformed
    /// stored list propagates as a load error.
    pub fn load(store: Box<dyn Store>) -> Result<Self> {
        let tasks = store.load()?;
        info!(count = tasks.len(), "TaskManager::load: initialized");
        Ok(Self {
            tasks,
            pending_input: String::new(),
            store,
        })
    }

    /// The current task list
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The current pending-input text
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replace the pending input verbatim (no trimming at this stage)
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Commit the pending input as a new task.
    ///
    /// The input is trimmed first; if nothing remains the call is a silent
    /// no-op with no state change and no persistence write. Otherwise the
    /// new task is appended, the pending input is cleared, and the list is
    /// saved. Returns whether a task was created.
    pub fn add_task(&mut self) -> Result<bool> {
        let text = self.pending_input.trim();
        if text.is_empty() {
            debug!("TaskManager::add_task: empty input, rejected");
            return Ok(false);
        }

        let task = Task::new(next_id(&self.tasks), text);
        info!(id = task.id, text = %task.text, "TaskManager::add_task: created");
        self.tasks.push(task);
        self.pending_input.clear();
        self.store.save(&self.tasks)?;
        Ok(true)
    }

    /// Flip the completed flag of the task with the given id.
    ///
    /// An unknown id leaves the list unchanged (tolerance policy, not an
    /// error). The list is saved either way - the mutation-triggered save
    /// has no way to distinguish a no-op.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            debug!(id, completed = task.completed, "TaskManager::toggle_task");
        } else {
            debug!(id, "TaskManager::toggle_task: unknown id, no-op");
        }
        self.store.save(&self.tasks)?;
        Ok(())
    }

    /// Remove the task with the given id, preserving the order of the rest.
    ///
    /// An unknown id is a silent no-op; the list is saved either way.
    pub fn delete_task(&mut self, id: TaskId) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() < before {
            debug!(id, "TaskManager::delete_task: removed");
        } else {
            debug!(id, "TaskManager::delete_task: unknown id, no-op");
        }
        self.store.save(&self.tasks)?;
        Ok(())
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Number of tasks in the list
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }
}
