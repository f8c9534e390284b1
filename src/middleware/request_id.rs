// ABOUTME: Request ID middleware for correlation and structured logging
// ABOUTME: Honors inbound x-request-id headers and generates IDs for all other requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use uuid::Uuid;

/// Header used for request correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID that flows through the request lifecycle
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    /// Create a new request ID with a generated value
    #[must_use]
    pub fn new() -> Self {
        Self(format!("req_{}", Uuid::new_v4().simple()))
    }

    /// The request ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware that attaches a request ID to every request and response
///
/// Reuses an inbound `x-request-id` header when present so upstream proxies
/// keep their correlation ids, otherwise generates a fresh one. The ID is
/// available to handlers as an [`axum::Extension`] and echoed on the
/// response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(RequestId::new, |value| RequestId(value.to_owned()));

    tracing::debug!(request_id = %request_id.as_str(), "request received");

    request.extensions_mut().insert(request_id.clone());
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
