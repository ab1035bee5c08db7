// ABOUTME: Main library entry point for the Cardio Risk API service
// ABOUTME: Wires configuration, logging, middleware, and routes around the ASCVD risk engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

#![deny(unsafe_code)]

//! # Cardio Risk Server
//!
//! An HTTP service that estimates 10-year ASCVD (atherosclerotic cardiovascular
//! disease) risk with the Pooled Cohort Equations and maps the result to a
//! risk tier with fixed care recommendations.
//!
//! ## Architecture
//!
//! - **`cardio-core`**: error codes, domain models, and constants
//! - **`cardio-intelligence`**: coefficient table, risk equation, classification
//! - **this crate**: environment configuration, structured logging, middleware,
//!   HTTP routes, and the server lifecycle
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cardio_risk_server::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("{}", config.summary());
//!     cardio_risk_server::server::run(&config).await
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Service constants and environment lookups
pub mod constants;

/// Unified error handling (re-exported from `cardio-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: request ids, CORS, and request spans
pub mod middleware;

/// HTTP route definitions
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Domain models shared with the risk engine
pub use cardio_core::models;

/// Risk engine
pub use cardio_intelligence as intelligence;
