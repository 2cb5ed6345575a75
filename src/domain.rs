//! Core task types
//!
//! A [`Task`] is one to-do entry. The persisted layout is a plain JSON
//! array of these records; there is no version field and no migration.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Unique identifier for a task
pub type TaskId = i64;

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned at creation, never reassigned
    pub id: TaskId,
    /// Trimmed, non-empty text content (immutable - there is no edit operation)
    pub text: String,
    /// Completion flag, toggled by user action
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    ///
    /// The caller is responsible for trimming `text` and for id uniqueness
    /// (see [`next_id`]).
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        let text = text.into();
        debug!(id, %text, "Task::new");
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Generate a fresh id that is unique within `tasks`.
///
/// Ids are millisecond Unix timestamps, bumped past the current maximum so
/// two tasks created within the same tick still get distinct ids.
pub fn next_id(tasks: &[Task]) -> TaskId {
    let now = Utc::now().timestamp_millis();
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    now.max(max + 1)
}
