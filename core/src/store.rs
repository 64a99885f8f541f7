//! Task storage.
//!
//! [`TaskStore`] is the seam between the HTTP layer and the data: handlers
//! hold an `Arc<dyn TaskStore>` constructed at startup, so a durable backend
//! can later be swapped in without touching call sites.
//!
//! The in-memory implementation guards its collection with a single mutex.
//! Request handlers run concurrently, and every operation (reads included)
//! takes the lock, so no handler can observe a half-applied mutation.

use crate::task::Task;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Errors produced by a [`TaskStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A task with this id is already stored.
    #[error("task with id {0} already exists")]
    DuplicateId(i64),

    /// More than one stored task matched this id.
    ///
    /// The store enforces uniqueness on insert, so this indicates a broken
    /// invariant (e.g. a misbehaving alternative implementation), not
    /// something a client caused.
    #[error("multiple tasks stored under id {0}")]
    AmbiguousId(i64),
}

/// Storage for [`Task`] values with CRUD semantics.
///
/// Implementations must be safe to share across concurrently dispatched
/// request handlers: all operations on the same store must be serialized
/// against each other.
pub trait TaskStore: Send + Sync {
    /// Returns all stored tasks in insertion order. Never fails.
    fn list(&self) -> Vec<Task>;

    /// Returns the task whose id matches, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AmbiguousId`] if more than one stored task
    /// matches, rather than silently picking one.
    fn get(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// Appends the task to the collection and returns it unchanged.
    ///
    /// Field validation is the caller's concern; the store only enforces
    /// id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if a task with the same id is
    /// already stored.
    fn add(&self, task: Task) -> Result<Task, StoreError>;

    /// Removes every stored task whose id matches and returns how many
    /// were removed. Removing nothing is a no-op, not an error.
    fn delete(&self, id: i64) -> usize;
}

/// In-memory [`TaskStore`] guarded by a mutex.
///
/// Tasks live for the lifetime of the process; there is no persistence
/// across restarts.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Takes the lock, recovering from poisoning.
    ///
    /// The protected value is a plain `Vec`; a panic in another thread
    /// cannot leave it logically torn, so the poisoned guard is usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn list(&self) -> Vec<Task> {
        self.lock().clone()
    }

    fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let tasks = self.lock();
        let mut matches = tasks.iter().filter(|task| task.id == id);
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(Some(task.clone())),
            (Some(_), Some(_)) => Err(StoreError::AmbiguousId(id)),
            (None, _) => Ok(None),
        }
    }

    fn add(&self, task: Task) -> Result<Task, StoreError> {
        let mut tasks = self.lock();
        if tasks.iter().any(|stored| stored.id == task.id) {
            return Err(StoreError::DuplicateId(task.id));
        }
        tasks.push(task.clone());
        Ok(task)
    }

    fn delete(&self, id: i64) -> usize {
        let mut tasks = self.lock();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        before - tasks.len()
    }
}
