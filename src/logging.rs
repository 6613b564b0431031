//! Middleware for logging requests and how long they took to handle.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log the method, path, response status and elapsed time of each request.
///
/// The request and response pass through untouched.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let label = format!("[{}] {}", request.method(), request.uri());
    tracing::debug!("Received request: {label}");

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    tracing::info!("{label}: {} in {elapsed:?}", response.status());

    response
}
