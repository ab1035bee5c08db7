// ABOUTME: Application constants grouped by domain
// ABOUTME: Service identity, HTTP defaults, and the clinical validity domain of the risk equation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP service
    pub const CARDIO_RISK_SERVER: &str = "cardio-risk-server";
    /// Name of the command-line tool
    pub const CARDIO_RISK_CLI: &str = "cardio-risk-cli";
}

/// HTTP surface defaults
pub mod http {
    /// Header carrying the per-request correlation ID
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Path of the risk assessment endpoint
    pub const RISK_ASSESSMENT_PATH: &str = "/api/risk-assessment";
    /// Default bind address
    pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
    /// Default bind port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum request body size in bytes
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;
}

/// Clinical limits of the Pooled Cohort Equations
pub mod clinical {
    /// Youngest age the equations were derived for
    pub const MIN_AGE_YEARS: u32 = 20;
    /// Oldest age the equations were derived for
    pub const MAX_AGE_YEARS: u32 = 79;
    /// Upper bound of a risk percentage
    pub const MAX_RISK_PERCENT: f64 = 100.0;
}
