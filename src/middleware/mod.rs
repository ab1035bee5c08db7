// ABOUTME: HTTP middleware for request tracing, request ids, and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS setup for the router

/// Cross-origin resource sharing configuration
pub mod cors;
/// Request id generation and propagation
pub mod request_id;
/// Request spans for structured logging
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, tag_error, RequestId};
pub use tracing::{create_request_span, make_request_span};
