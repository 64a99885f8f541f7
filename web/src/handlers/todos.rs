//! Todo CRUD endpoints.
//!
//! Thin adapters over the core task store:
//! - GET /todos - List all tasks
//! - GET /todos/:id - Get a task by id
//! - POST /todos - Create a task (validated first)
//! - DELETE /todos/:id - Delete a task by id

use crate::WebResult;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};
use todos_core::{Task, validate_new_task};

/// List all tasks in insertion order.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5144/todos
/// ```
#[allow(clippy::unused_async)]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.store.list())
}

/// Get a task by id.
///
/// Returns 404 if no task matches. If the store's uniqueness invariant is
/// broken and several tasks match, this surfaces as a 500 rather than
/// silently picking one.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5144/todos/1
/// ```
///
/// # Errors
///
/// - 404 if no task with the given id is stored
#[allow(clippy::unused_async)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Json<Task>> {
    match state.store.get(id)? {
        Some(task) => Ok(Json(task)),
        None => Err(AppError::not_found("Task", id)),
    }
}

/// Create a task.
///
/// The candidate passes through the validation policy first; a non-empty
/// mapping rejects the request with a 400 carrying every violated rule.
/// On success the task is stored unchanged and echoed back with a
/// `Location` header pointing at the new resource.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5144/todos \
///   -H "Content-Type: application/json" \
///   -d '{"id": 1, "name": "Buy milk", "due_at": "2030-01-01T00:00:00Z", "is_completed": false}'
/// ```
///
/// # Errors
///
/// - 400 with a field-to-messages mapping if validation rejects the task
/// - 409 if a task with the same id already exists
#[allow(clippy::unused_async)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(task): Json<Task>,
) -> WebResult<(StatusCode, [(HeaderName, String); 1], Json<Task>)> {
    let errors = validate_new_task(&task, state.clock.now());
    if !errors.is_empty() {
        return Err(AppError::validation_failed(errors));
    }

    let task = state.store.add(task)?;
    let location = format!("/todos/{}", task.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(task),
    ))
}

/// Delete a task by id.
///
/// Removes every match and answers 204 regardless of whether anything was
/// stored under the id.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:5144/todos/1
/// ```
#[allow(clippy::unused_async)]
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i64>) -> StatusCode {
    let removed = state.store.delete(id);
    tracing::debug!(id, removed, "Delete handled");
    StatusCode::NO_CONTENT
}
