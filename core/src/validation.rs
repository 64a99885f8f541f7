//! Validation policy for new tasks.
//!
//! The policy is a pure function over a candidate task and an evaluation
//! time. It is applied at the boundary, before the store is touched, so it
//! stays testable without any HTTP or storage concern. All rules are
//! evaluated independently and every violation is collected; a candidate
//! failing two rules produces two entries, not just the first.

use crate::task::Task;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from field name to human-readable error messages.
///
/// Empty means the candidate is acceptable. The map is ordered so error
/// bodies render deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records a violation message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// `true` if no rule was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one violation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded against a field, if any.
    #[must_use]
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Consumes the mapping into its underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

/// Applies the creation rules to a candidate task.
///
/// Rules:
/// - `due_at` must not be strictly earlier than `now`.
/// - `is_completed` must not be `true` for a newly created task.
#[must_use]
pub fn validate_new_task(task: &Task, now: DateTime<Utc>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if task.due_at < now {
        errors.add("due_at", "Cannot have due date in the past");
    }
    if task.is_completed {
        errors.add("is_completed", "Cannot add completed todo");
    }

    errors
}
