//! Application state for Axum handlers.
//!
//! Contains the shared resources needed by HTTP handlers: the task store
//! and the clock the validation policy evaluates against. Both are injected
//! at construction (lifetime equal to the process) rather than resolved
//! from any container, so handlers depend only on the trait seams.

use std::sync::Arc;
use todos_core::{Clock, InMemoryTaskStore, SystemClock, TaskStore};

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request.
#[derive(Clone)]
pub struct AppState {
    /// Task storage; swap the implementation here to change the backend
    /// without touching call sites.
    pub store: Arc<dyn TaskStore>,
    /// Clock used as the validation policy's notion of "now".
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state from explicit dependencies.
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// State backed by an empty in-memory store and the system clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTaskStore::new()), Arc::new(SystemClock))
    }
}
