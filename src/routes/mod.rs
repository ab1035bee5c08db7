// ABOUTME: Route module organization for Cardio Risk API HTTP endpoints
// ABOUTME: Groups health checks, the risk assessment endpoint, and shared fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Route module for the Cardio Risk API
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the risk engine.

/// Health check and readiness routes
pub mod health;
/// `POST /api/risk-assessment`
pub mod risk_assessment;

pub use health::HealthRoutes;
pub use risk_assessment::{RiskAssessmentRequest, RiskAssessmentResponse, RiskAssessmentRoutes};

use crate::errors::AppError;
use crate::middleware::{tag_error, RequestId};
use axum::{http::Uri, Extension};

/// Router-level fallback for unknown paths
pub async fn not_found(uri: Uri, request_id: Option<Extension<RequestId>>) -> AppError {
    tag_error(
        AppError::not_found(format!("Route {}", uri.path())),
        request_id.as_ref().map(|Extension(id)| id),
    )
}
