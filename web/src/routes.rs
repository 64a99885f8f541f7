//! Router configuration for the todos service.
//!
//! Builds the complete Axum router: the CRUD endpoints, the health check,
//! the legacy `/tasks` redirects, and the request-logging layer.

use crate::handlers::{health, todos};
use crate::middleware::request_log_layer;
use crate::state::AppState;
use axum::{
    Router,
    http::Uri,
    response::Redirect,
    routing::{any, get},
};

/// Build the complete Axum router.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
///
/// # Returns
///
/// Configured Axum router ready to serve requests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Todo CRUD
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/:id",
            get(todos::get_todo).delete(todos::delete_todo),
        )
        // Legacy path prefix, kept for old clients
        .route("/tasks", any(redirect_legacy))
        .route("/tasks/*rest", any(redirect_legacy))
        .layer(request_log_layer())
        .with_state(state)
}

/// Redirect a legacy `/tasks...` request to the equivalent `/todos...` path.
///
/// Answers 308 Permanent Redirect, which preserves the method and body, so
/// old clients POSTing to `/tasks` still reach the create endpoint.
#[allow(clippy::unused_async)]
async fn redirect_legacy(uri: Uri) -> Redirect {
    let path = uri.path().replacen("/tasks", "/todos", 1);
    let target = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };
    Redirect::permanent(&target)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::in_memory())
    }

    #[tokio::test]
    async fn test_health_route_is_wired() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_legacy_tasks_path_redirects() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/tasks/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/todos/5"
        );
    }

    #[tokio::test]
    async fn test_legacy_redirect_keeps_the_query_string() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/tasks?limit=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/todos?limit=3"
        );
    }
}
