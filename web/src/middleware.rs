//! Axum middleware for request logging.
//!
//! Every request/response pair is logged with its method, path, and UTC
//! timestamps at start and completion, plus the response status and elapsed
//! time. Each request is tagged with a generated request id that handlers
//! run under (as a tracing span field) and that clients receive back in an
//! `X-Request-ID` response header.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use todos_web::middleware::request_log_layer;
//!
//! let app = Router::new()
//!     .route("/todos", get(list_todos))
//!     .layer(request_log_layer());
//! ```

use axum::{extract::Request, http::HeaderValue, response::Response};
use chrono::Utc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for the generated request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Create a layer that logs every request and response.
#[must_use]
pub fn request_log_layer() -> RequestLogLayer {
    RequestLogLayer
}

/// Layer for request/response logging.
#[derive(Clone, Debug)]
pub struct RequestLogLayer;

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogMiddleware { inner }
    }
}

/// Middleware service for request/response logging.
#[derive(Clone, Debug)]
pub struct RequestLogMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for RequestLogMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let request_id = Uuid::new_v4();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let started_at = Utc::now();

        let span = tracing::info_span!(
            "http_request",
            request_id = %request_id,
            method = %method,
            path = %path,
        );

        let fut = self.inner.call(req);

        Box::pin(async move {
            tracing::info!(parent: &span, started_at = %started_at, "Request started");

            let mut response = fut.instrument(span.clone()).await?;

            let completed_at = Utc::now();
            let elapsed_ms = (completed_at - started_at).num_milliseconds();
            tracing::info!(
                parent: &span,
                status = %response.status(),
                completed_at = %completed_at,
                elapsed_ms,
                "Request completed"
            );

            // Hand the request id back to the client
            if let Ok(header_value) = HeaderValue::from_str(&request_id.to_string()) {
                response
                    .headers_mut()
                    .insert(REQUEST_ID_HEADER, header_value);
            }

            Ok(response)
        })
    }
}
