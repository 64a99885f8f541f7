//! Axum HTTP layer for the todos service.
//!
//! This crate is the imperative shell around [`todos_core`]: it decodes
//! requests into domain values, applies the validation policy, hands the
//! result to the task store, and translates the outcome back into HTTP
//! responses.
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Extract** the path id or JSON task body
//! 3. **Validate** (create only) via the core validation policy
//! 4. **Call** the shared [`TaskStore`](todos_core::TaskStore)
//! 5. **Map** the result to a status code and JSON body
//!
//! Cross-cutting pieces live beside the handlers: request logging as a tower
//! layer ([`middleware`]), legacy `/tasks` redirects in the router
//! ([`routes`]), and error-to-response bridging in [`error`].

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use middleware::{REQUEST_ID_HEADER, request_log_layer};
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
