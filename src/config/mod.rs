// ABOUTME: Configuration module for the Cardio Risk API service
// ABOUTME: Exposes environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

/// Environment variable based server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpConfig, LogLevel, ServerConfig};
