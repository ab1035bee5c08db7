// ABOUTME: HTTP server binary for the Cardio Risk API
// ABOUTME: Loads environment configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! # Cardio Risk Server Binary
//!
//! Starts the HTTP service exposing `POST /api/risk-assessment`, `GET /health`,
//! and `GET /ready`.

use anyhow::Result;
use clap::Parser;
use cardio_risk_server::{config::environment::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cardio-risk-server")]
#[command(about = "Cardio Risk API - 10-year ASCVD risk assessment over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override HTTP bind host
    #[arg(long)]
    http_host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(http_host) = args.http_host {
        config.http_host = http_host;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());

    if let Err(e) = server::run(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
