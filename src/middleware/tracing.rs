// ABOUTME: Request tracing spans for correlation and structured logging
// ABOUTME: Creates an http_request span per request carrying method, path, and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use super::request_id::RequestId;
use axum::{body::Body, http::Request};
use tracing::Span;

/// Create a tracing span for HTTP requests
#[must_use]
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = tracing::field::Empty,
    )
}

/// Span factory for `TraceLayer::make_span_with`
///
/// Must run inside the request id middleware so the id is already present.
#[must_use]
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map_or("-", RequestId::as_str);
    create_request_span(request.method().as_str(), request.uri().path(), request_id)
}
