// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Environment-based configuration management for production deployment

use crate::constants::{env_config, http};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::SocketAddr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

/// HTTP resource guards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Seconds before an in-flight request is answered with 408
    pub request_timeout_secs: u64,
    /// Largest accepted request body
    pub max_request_body_bytes: usize,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
    /// HTTP resource guards
    pub http: HttpConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: http::DEFAULT_HTTP_HOST.to_owned(),
            http_port: http::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            http: HttpConfig {
                request_timeout_secs: http::DEFAULT_REQUEST_TIMEOUT_SECS,
                max_request_body_bytes: http::DEFAULT_MAX_REQUEST_BODY_BYTES,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_host: env_config::http_host(),
            http_port: env_var_or("HTTP_PORT", &http::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_config::environment()),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            http: HttpConfig {
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &http::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
                max_request_body_bytes: env_var_or(
                    "MAX_REQUEST_BODY_BYTES",
                    &http::DEFAULT_MAX_REQUEST_BODY_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_REQUEST_BODY_BYTES value")?,
            },
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address to bind the HTTP listener to
    ///
    /// # Errors
    ///
    /// Returns an error if `http_host` is not a valid IP address
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.http_host, self.http_port))
    }

    /// Allowed CORS origins as a list (`["*"]` for any origin)
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        parse_origins(&self.cors.allowed_origins)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Cardio Risk Server Configuration:\n\
             - HTTP Address: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Request Body: {} bytes",
            self.http_host,
            self.http_port,
            self.environment,
            self.log_level,
            self.allowed_origins().join(", "),
            self.http.request_timeout_secs,
            self.http.max_request_body_bytes,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_default_bind_address() {
        let addr = ServerConfig::default().bind_address().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host_is_reported() {
        let config = ServerConfig {
            http_host: "not an ip".to_owned(),
            ..ServerConfig::default()
        };
        let error = config.bind_address().unwrap_err();
        assert!(error.to_string().contains("Invalid bind address"));
    }

    #[test]
    fn test_summary_lists_guards() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("Request Timeout: 30s"));
        assert!(summary.contains("Max Request Body: 16384 bytes"));
    }
}
