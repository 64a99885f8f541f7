//! The task entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo task.
///
/// Ids are caller-supplied; the store enforces that at most one task per id
/// is held at any time. Tasks are immutable once stored: there is no update
/// operation, only create and delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-supplied integer identifier, unique among stored tasks
    pub id: i64,
    /// Text label, no constraints enforced
    pub name: String,
    /// When the task is due
    pub due_at: DateTime<Utc>,
    /// Whether the task has been completed
    pub is_completed: bool,
}

impl Task {
    /// Creates a new, not-yet-completed task.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, due_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            due_at,
            is_completed: false,
        }
    }
}
