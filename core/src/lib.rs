//! # Todos Core
//!
//! Domain logic for the todos service, independent of any HTTP concern.
//!
//! This crate provides the two components the service is built from:
//!
//! - **Task Store** ([`TaskStore`]): owns the collection of [`Task`] records
//!   and answers CRUD queries against it. The in-memory implementation
//!   ([`InMemoryTaskStore`]) serializes all reads and writes behind a single
//!   lock so that concurrently dispatched request handlers cannot observe
//!   torn state or lose updates.
//! - **Validation Policy** ([`validate_new_task`]): a pure function applied
//!   to a candidate task before it is accepted into the store. It collects
//!   every violated rule into a field-to-messages mapping rather than
//!   stopping at the first failure.
//!
//! The HTTP layer composes these explicitly: decode the request, validate,
//! then store. Keeping the policy out of the store keeps both halves
//! testable in isolation.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use todos_core::{InMemoryTaskStore, Task, TaskStore, validate_new_task};
//!
//! let store = InMemoryTaskStore::new();
//! let task = Task::new(1, "Write the report", Utc::now() + Duration::hours(2));
//!
//! let errors = validate_new_task(&task, Utc::now());
//! assert!(errors.is_empty());
//!
//! store.add(task.clone()).unwrap();
//! assert_eq!(store.get(1).unwrap(), Some(task));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod store;
pub mod task;
pub mod validation;

// Re-export key types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{InMemoryTaskStore, StoreError, TaskStore};
pub use task::Task;
pub use validation::{ValidationErrors, validate_new_task};
