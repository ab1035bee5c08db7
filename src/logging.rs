// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and output destinations for the risk service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Structured logging configuration
//!
//! Patient measurements never reach the logs: handlers record the request id,
//! the resulting tier, and the score only.

use crate::constants::service_names;
use anyhow::{Context, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Directives applied on top of any `RUST_LOG` value
const NOISE_DIRECTIVES: &[&str] = &["hyper=warn", "hyper::proto=warn", "tower_http=info"];

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse from the `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Standard output (server)
    #[default]
    Stdout,
    /// Standard error (CLI, keeps stdout for results)
    Stderr,
}

/// Optional event metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOutputConfig {
    /// Include source file and line numbers
    pub location: bool,
    /// Include thread ids and names
    pub thread: bool,
    /// Emit span open/close events
    pub spans: bool,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or full `EnvFilter` directive string
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Output destination
    pub target: LogTarget,
    /// Optional event metadata
    pub output: LogOutputConfig,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            target: LogTarget::Stdout,
            output: LogOutputConfig::default(),
            service_name: service_names::CARDIO_RISK_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::from_str_or_default(
                &env::var("LOG_FORMAT").unwrap_or_default(),
            ),
            target: LogTarget::Stdout,
            output: LogOutputConfig {
                location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
                thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
                spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            },
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::CARDIO_RISK_SERVER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Quiet configuration for the command-line tool
    #[must_use]
    pub fn for_cli() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            format: LogFormat::Compact,
            target: LogTarget::Stderr,
            service_name: service_names::CARDIO_RISK_CLI.into(),
            ..Self::default()
        }
    }

    /// Build the filter: configured level plus noise reduction
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        NOISE_DIRECTIVES.iter().fold(
            EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info")),
            |filter, directive| match directive.parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            },
        )
    }

    fn writer(&self) -> BoxMakeWriter {
        match self.target {
            LogTarget::Stdout => BoxMakeWriter::new(io::stdout),
            LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.output.spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.output.location)
                        .with_line_number(self.output.location)
                        .with_thread_ids(self.output.thread)
                        .with_thread_names(self.output.thread)
                        .with_target(true)
                        .with_span_events(self.span_events())
                        .with_writer(self.writer()),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.output.location)
                        .with_line_number(self.output.location)
                        .with_thread_ids(self.output.thread)
                        .with_thread_names(self.output.thread)
                        .with_target(true)
                        .with_span_events(self.span_events())
                        .with_writer(self.writer()),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_span_events(FmtSpan::NONE)
                        .with_writer(self.writer()),
                )
                .try_init(),
        }
        .context("Failed to initialize tracing subscriber")?;

        if self.target == LogTarget::Stdout {
            self.log_startup_info();
        }
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Cardio Risk Server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.output.location,
                    "thread": self.output.thread,
                    "spans": self.output.spans
                }
            }
        });

        info!("Logging configured: {config_summary}");
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
