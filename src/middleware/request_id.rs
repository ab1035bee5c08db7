// ABOUTME: Request id middleware that tags every request and response with a correlation id
// ABOUTME: Reuses a well-formed incoming x-request-id header, otherwise generates a UUID v4
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Request ID Middleware
//!
//! The id is inserted into request extensions as [`RequestId`] so handlers can
//! attach it to error bodies, and echoed back in the `x-request-id` header.
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Extension, Router};
//! use cardio_risk_server::middleware::request_id::{request_id_middleware, RequestId};
//!
//! async fn handler(Extension(request_id): Extension<RequestId>) -> String {
//!     request_id.as_str().to_owned()
//! }
//!
//! let app: Router = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn(request_id_middleware));
//! ```

use crate::constants::http::REQUEST_ID_HEADER;
use crate::errors::AppError;
use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::fmt;
use uuid::Uuid;

/// Longest client-supplied id that is propagated as-is
const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation id for a single HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh UUID v4 id
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Use the incoming header when it is a short, printable ASCII token
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
        let well_formed = !value.is_empty()
            && value.len() <= MAX_REQUEST_ID_LEN
            && value.bytes().all(|b| b.is_ascii_graphic());
        well_formed.then(|| Self(value.to_owned()))
    }

    /// Borrow the id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stamp an error with the id of the request that produced it
#[must_use]
pub fn tag_error(mut error: AppError, request_id: Option<&RequestId>) -> AppError {
    error.request_id = request_id.map(|id| id.0.clone());
    error
}

/// Attach a [`RequestId`] to the request extensions and the response headers
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(req.headers()).unwrap_or_else(RequestId::generate);

    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let id = RequestId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, RequestId::generate());
    }

    #[test]
    fn test_incoming_header_is_validated() {
        let mut headers = HeaderMap::new();
        assert!(RequestId::from_headers(&headers).is_none());

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("trace-abc-123"));
        assert_eq!(
            RequestId::from_headers(&headers).map(|id| id.to_string()),
            Some("trace-abc-123".to_owned())
        );

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("has space"));
        assert!(RequestId::from_headers(&headers).is_none());

        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert!(RequestId::from_headers(&headers).is_none());
    }
}
