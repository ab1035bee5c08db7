// ABOUTME: Service constants and environment-driven configuration lookups
// ABOUTME: Re-exports shared constants and reads individual settings with typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! # Constants Module
//!
//! Hardcoded constants come from `cardio-core`; `env_config` reads the
//! environment and falls back to those defaults.

pub use cardio_core::constants::{clinical, http, service_names};

/// Environment-based configuration lookups
pub mod env_config {
    use super::http;
    use std::env;

    /// Get HTTP bind host from environment or default
    #[must_use]
    pub fn http_host() -> String {
        env::var("HTTP_HOST").unwrap_or_else(|_| http::DEFAULT_HTTP_HOST.to_owned())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned())
    }

    /// Get deployment environment from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned())
    }

    /// Get CORS allowed origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned())
    }
}
