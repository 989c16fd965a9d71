//! Task data structure.
//!
//! A task is a short description plus a free-form scheduled time and a
//! completion flag. It carries no identifier of its own: tasks are addressed
//! by their 1-based position in the list.

use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A single to-do entry as stored in `todos.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    /// Free text, never parsed as a date.
    #[serde(rename = "taskTime")]
    pub scheduled_time: String,
    pub done: bool,
}

impl Task {
    /// Create a new, pending task.
    pub fn new(description: impl Into<String>, scheduled_time: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            scheduled_time: scheduled_time.into(),
            done: false,
        }
    }

    pub fn status(&self) -> Status {
        Status::from_done(self.done)
    }

    /// Flip completion and return the resulting status.
    pub fn toggle(&mut self) -> Status {
        self.done = !self.done;
        self.status()
    }
}
