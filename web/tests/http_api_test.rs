//! HTTP API integration tests.
//!
//! Drives the full router (handlers, validation, store, redirects) through
//! in-process requests, verifying the HTTP contract end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Integration tests can use unwrap/expect

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use std::sync::Arc;
use todos_core::{FixedClock, InMemoryTaskStore};
use todos_web::{AppState, REQUEST_ID_HEADER, build_router};
use tower::ServiceExt;

/// Router whose validation clock is pinned to `now`.
fn app_at(now: DateTime<Utc>) -> Router {
    build_router(AppState::new(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(FixedClock::new(now)),
    ))
}

fn post_todo(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn todo(id: i64, name: &str, due_at: DateTime<Utc>, is_completed: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "due_at": due_at,
        "is_completed": is_completed,
    })
}

#[tokio::test]
async fn test_invalid_post_returns_400_with_both_violations() {
    let now = Utc::now();
    let app = app_at(now);

    let candidate = todo(1, "x", now - Duration::hours(1), true);
    let response = app.clone().oneshot(post_todo(&candidate)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["errors"]["due_at"][0],
        "Cannot have due date in the past"
    );
    assert_eq!(body["errors"]["is_completed"][0], "Cannot add completed todo");

    // Nothing reached the store
    let response = app.oneshot(get("/todos")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_full_crud_flow() {
    let now = Utc::now();
    let app = app_at(now);
    let candidate = todo(2, "y", now + Duration::hours(1), false);

    // Create
    let response = app.clone().oneshot(post_todo(&candidate)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/todos/2"
    );
    assert_eq!(body_json(response).await, candidate);

    // Read back
    let response = app.clone().oneshot(get("/todos/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, candidate);

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app.oneshot(get("/todos/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let now = Utc::now();
    let app = app_at(now);

    for id in [9, 4, 7] {
        let candidate = todo(id, &format!("task {id}"), now + Duration::hours(1), false);
        let response = app.clone().oneshot(post_todo(&candidate)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/todos")).await.unwrap();
    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [9, 4, 7]);
}

#[tokio::test]
async fn test_duplicate_id_is_a_conflict() {
    let now = Utc::now();
    let app = app_at(now);
    let candidate = todo(1, "first", now + Duration::hours(1), false);

    let response = app.clone().oneshot(post_todo(&candidate)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let duplicate = todo(1, "second", now + Duration::hours(2), false);
    let response = app.clone().oneshot(post_todo(&duplicate)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The original survives unchanged
    let response = app.oneshot(get("/todos/1")).await.unwrap();
    assert_eq!(body_json(response).await["name"], "first");
}

#[tokio::test]
async fn test_delete_of_missing_id_is_still_no_content() {
    let app = app_at(Utc::now());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_legacy_tasks_prefix_redirects_to_todos() {
    let app = app_at(Utc::now());

    let response = app.clone().oneshot(get("/tasks/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/todos/3"
    );

    // 308 preserves the method, so a redirected POST stays a POST
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tasks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/todos");
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let app = app_at(Utc::now());

    let response = app.oneshot(get("/todos")).await.unwrap();
    assert!(response.headers().get(REQUEST_ID_HEADER).is_some());
}
