// ABOUTME: Unified error types with error codes and HTTP status mapping
// ABOUTME: Provides AppError, ErrorCode, and the JSON error body returned to API callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! # Unified Error Handling System
//!
//! Centralized error handling for the cardio risk service. Every failure that
//! crosses the HTTP boundary is an [`AppError`] carrying an [`ErrorCode`], which
//! determines the status code, and a human-readable message.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request fields are missing, mistyped, or violate a domain rule
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Request body is not well-formed JSON
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric field lies outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Routing (4000-4999)
    /// No route matches the request path
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Route exists but does not accept the request method
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed = 4005,

    // Computation (7000-7999)
    /// No coefficient set exists for the requested sex/race combination
    #[serde(rename = "UNSUPPORTED_SUBGROUP")]
    UnsupportedSubgroup = 7000,

    // Internal Errors (9000-9999)
    /// Unexpected failure inside the service
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::UnsupportedSubgroup | Self::InternalError => 500,
        }
    }

    /// Whether the error was caused by the caller's request
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The request method is not allowed for this resource",
            Self::UnsupportedSubgroup => {
                "Risk calculation is not available for this demographic subgroup"
            }
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlating the failure with logs
    pub request_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed request body
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside its accepted range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Method not allowed
    pub fn method_not_allowed(method: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MethodNotAllowed,
            format!("Method {method} not allowed"),
        )
    }

    /// Unsupported demographic subgroup
    pub fn unsupported_subgroup(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedSubgroup, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
///
/// Serialized as `{"error": "...", "code": "...", "requestId": "..."}` so
/// callers can display `error` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Request ID when one was assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            code: error.code,
            request_id: error.request_id,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_client_error() {
            tracing::warn!(
                error.code = ?self.code,
                error.message = %self.message,
                request_id = self.request_id.as_deref().unwrap_or("-"),
                "Request rejected"
            );
        } else {
            tracing::error!(
                error.code = ?self.code,
                error.message = %self.message,
                request_id = self.request_id.as_deref().unwrap_or("-"),
                "Request failed"
            );
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
        assert_eq!(ErrorCode::MethodNotAllowed.http_status(), 405);
        assert_eq!(ErrorCode::UnsupportedSubgroup.http_status(), 500);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::invalid_input("hdl must be positive").with_request_id("req-123");

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.request_id.as_deref(), Some("req-123"));
        assert!(error.code.is_client_error());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::unsupported_subgroup("Only white male is implemented");
        let response = ErrorResponse::from(error);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Only white male is implemented");
        assert_eq!(json["code"], "UNSUPPORTED_SUBGROUP");
        assert!(json.get("requestId").is_none());
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::method_not_allowed("GET");
        assert_eq!(
            error.to_string(),
            "The request method is not allowed for this resource: Method GET not allowed"
        );
    }
}
