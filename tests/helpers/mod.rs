// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process Axum request builder and common router fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use cardio_risk_server::{
    config::environment::ServerConfig, intelligence::RiskScoreCalculator, server::build_router,
};
use std::sync::Arc;

/// Fully layered application router with default configuration
pub fn app() -> axum::Router {
    build_router(
        &ServerConfig::default(),
        Arc::new(RiskScoreCalculator::default()),
    )
}

/// Request body for the 55-year-old reference patient
pub fn reference_patient() -> serde_json::Value {
    serde_json::json!({
        "age": 55,
        "gender": "male",
        "race": "white",
        "cholesterol": 213,
        "hdl": 50,
        "bp": 120,
        "diabetes": false,
        "smoker": false,
        "onHypertensionTreatment": false
    })
}
