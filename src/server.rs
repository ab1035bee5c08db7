// ABOUTME: HTTP router assembly and server lifecycle for the Cardio Risk API
// ABOUTME: Layers request ids, tracing, CORS, body limit, and timeout; serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Server lifecycle
//!
//! Layer order, outermost first: request id, trace span, CORS, body limit,
//! timeout. The request id must wrap the trace layer so each span carries it.

use crate::config::environment::ServerConfig;
use crate::intelligence::RiskScoreCalculator;
use crate::middleware::{make_request_span, request_id_middleware, setup_cors};
use crate::routes::{self, HealthRoutes, RiskAssessmentRoutes};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, warn, Level};

/// Build the complete application router
#[must_use]
pub fn build_router(config: &ServerConfig, calculator: Arc<RiskScoreCalculator>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RiskAssessmentRoutes::routes(calculator))
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(make_request_span)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                )
                .layer(setup_cors(config))
                .layer(DefaultBodyLimit::max(config.http.max_request_body_bytes))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(config.http.request_timeout_secs),
                )),
        )
}

/// Bind the configured address and serve until SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server fails while running
pub async fn run(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    serve(listener, config).await
}

/// Serve on an already-bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, config: &ServerConfig) -> Result<()> {
    let app = build_router(config, Arc::new(RiskScoreCalculator::default()));

    info!(
        address = %listener.local_addr().context("Listener has no local address")?,
        "Cardio Risk Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Cardio Risk Server stopped");
    Ok(())
}

/// Resolve on SIGINT, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received, draining in-flight requests");
}
