// ABOUTME: Risk assessment route handler for POST /api/risk-assessment
// ABOUTME: Parses the JSON request, runs the risk calculator, and shapes the response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Risk assessment route
//!
//! The body is read as raw bytes and decoded here rather than through the
//! `Json` extractor, so malformed or mistyped input yields the service's own
//! error body (with request id) instead of axum's plain-text rejection.

use crate::constants::clinical::{MAX_AGE_YEARS, MIN_AGE_YEARS};
use crate::constants::http::RISK_ASSESSMENT_PATH;
use crate::errors::AppError;
use crate::intelligence::RiskScoreCalculator;
use crate::middleware::{tag_error, RequestId};
use crate::models::{Race, RiskAssessmentInput, RiskAssessmentResult, RiskTier, Sex};
use axum::{
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::sync::Arc;
use tracing::info;

fn default_race() -> String {
    "white".to_owned()
}

/// JSON request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentRequest {
    /// Age in years; must be a whole number
    pub age: f64,
    /// `male` or `female`
    pub gender: String,
    /// Defaults to `white` when omitted
    #[serde(default = "default_race")]
    pub race: String,
    /// Total cholesterol, mg/dL
    pub cholesterol: f64,
    /// HDL cholesterol, mg/dL
    pub hdl: f64,
    /// Systolic blood pressure, mmHg
    pub bp: f64,
    /// Diabetes diagnosis
    pub diabetes: bool,
    /// Current smoker
    pub smoker: bool,
    /// Treated for hypertension
    #[serde(default)]
    pub on_hypertension_treatment: bool,
}

impl TryFrom<RiskAssessmentRequest> for RiskAssessmentInput {
    type Error = AppError;

    fn try_from(request: RiskAssessmentRequest) -> Result<Self, Self::Error> {
        if !request.age.is_finite() || request.age <= 0.0 || request.age.fract().abs() > 0.0 {
            return Err(AppError::invalid_input(format!(
                "age must be a positive whole number, got {}",
                request.age
            )));
        }
        if !(f64::from(MIN_AGE_YEARS)..=f64::from(MAX_AGE_YEARS)).contains(&request.age) {
            return Err(AppError::value_out_of_range(format!(
                "age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {}",
                request.age
            )));
        }

        // Whole and within the age domain, so the cast is exact
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let age = request.age as u32;

        Ok(Self {
            age,
            sex: request.gender.parse::<Sex>()?,
            race: request.race.parse::<Race>()?,
            total_cholesterol: request.cholesterol,
            hdl_cholesterol: request.hdl,
            systolic_blood_pressure: request.bp,
            on_hypertension_treatment: request.on_hypertension_treatment,
            has_diabetes: request.diabetes,
            is_smoker: request.smoker,
        })
    }
}

/// JSON success body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentResponse {
    /// 10-year risk percentage, one decimal place
    pub risk_score: f64,
    /// Risk tier
    pub risk_level: RiskTier,
    /// Tier recommendations, in order
    pub recommendations: Vec<String>,
}

impl From<RiskAssessmentResult> for RiskAssessmentResponse {
    fn from(result: RiskAssessmentResult) -> Self {
        Self {
            risk_score: result.risk_percent,
            risk_level: result.risk_tier,
            recommendations: result
                .recommendations
                .iter()
                .map(|r| (*r).to_owned())
                .collect(),
        }
    }
}

/// Risk assessment routes
pub struct RiskAssessmentRoutes;

impl RiskAssessmentRoutes {
    /// Create the risk assessment route over a shared calculator
    #[must_use]
    pub fn routes(calculator: Arc<RiskScoreCalculator>) -> Router {
        Router::new()
            .route(
                RISK_ASSESSMENT_PATH,
                post(Self::handle_assess).fallback(Self::handle_method_not_allowed),
            )
            .with_state(calculator)
    }

    /// Handle `POST /api/risk-assessment`
    async fn handle_assess(
        State(calculator): State<Arc<RiskScoreCalculator>>,
        request_id: Option<Extension<RequestId>>,
        body: Bytes,
    ) -> Result<Json<RiskAssessmentResponse>, AppError> {
        Self::assess(&calculator, &body)
            .map_err(|error| tag_error(error, request_id.as_ref().map(|Extension(id)| id)))
    }

    fn assess(
        calculator: &RiskScoreCalculator,
        body: &[u8],
    ) -> Result<Json<RiskAssessmentResponse>, AppError> {
        let request: RiskAssessmentRequest = serde_json::from_slice(body).map_err(|e| {
            let message = format!("Invalid or missing input data: {e}");
            match e.classify() {
                Category::Data => AppError::invalid_input(message),
                Category::Io | Category::Syntax | Category::Eof => {
                    AppError::invalid_format(message)
                }
            }
        })?;

        let input = RiskAssessmentInput::try_from(request)?;
        let result = calculator.assess(&input)?;

        info!(
            risk.tier = %result.risk_tier,
            risk.score = result.risk_percent,
            "Risk assessment completed"
        );

        Ok(Json(RiskAssessmentResponse::from(result)))
    }

    /// Any verb other than `POST`
    async fn handle_method_not_allowed(
        method: Method,
        request_id: Option<Extension<RequestId>>,
    ) -> Response {
        let error = tag_error(
            AppError::method_not_allowed(method),
            request_id.as_ref().map(|Extension(id)| id),
        );
        ([(header::ALLOW, "POST")], error).into_response()
    }
}
