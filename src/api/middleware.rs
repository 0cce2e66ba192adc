//! Request timing middleware.
//!
//! Logs method, path, status and wall time of every request at info level.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Wraps a request and logs how long the inner service took.
pub async fn log_request_timing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        took = ?started.elapsed(),
        "request completed"
    );
    response
}
