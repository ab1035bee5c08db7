// ABOUTME: Unit tests for the unified error system
// ABOUTME: Validates status mapping, JSON error bodies, and risk-engine error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{body::to_bytes, response::IntoResponse};
use cardio_risk_server::errors::{AppError, ErrorCode, ErrorResponse};
use cardio_risk_server::intelligence::{RiskCalculationError, Subgroup};
use cardio_risk_server::models::{Race, Sex};

#[test]
fn test_error_codes_map_to_status() {
    let cases = [
        (ErrorCode::InvalidInput, 400),
        (ErrorCode::InvalidFormat, 400),
        (ErrorCode::ValueOutOfRange, 400),
        (ErrorCode::ResourceNotFound, 404),
        (ErrorCode::MethodNotAllowed, 405),
        (ErrorCode::UnsupportedSubgroup, 500),
        (ErrorCode::InternalError, 500),
    ];
    for (code, status) in cases {
        assert_eq!(code.http_status(), status, "{code:?}");
    }
}

#[test]
fn test_error_response_shape() {
    let body = ErrorResponse::from(AppError::invalid_input("hdl must be positive").with_request_id("req-1"));
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "error": "hdl must be positive",
            "code": "INVALID_INPUT",
            "requestId": "req-1"
        })
    );
}

#[test]
fn test_request_id_omitted_when_absent() {
    let json = serde_json::to_value(ErrorResponse::from(AppError::internal("boom"))).unwrap();
    assert!(json.get("requestId").is_none());
}

#[tokio::test]
async fn test_into_response_uses_code_status() {
    let response = AppError::unsupported_subgroup("no coefficients").into_response();

    assert_eq!(response.status().as_u16(), 500);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "UNSUPPORTED_SUBGROUP");
    assert_eq!(json["error"], "no coefficients");
}

#[test]
fn test_risk_errors_convert_to_app_errors() {
    let validation: AppError = RiskCalculationError::InvalidInput("bp must be positive".into()).into();
    assert_eq!(validation.code, ErrorCode::InvalidInput);

    let range: AppError = RiskCalculationError::OutOfRange("age".into()).into();
    assert_eq!(range.code, ErrorCode::ValueOutOfRange);

    let unsupported: AppError = RiskCalculationError::UnsupportedSubgroup {
        subgroup: Subgroup::new(Sex::Female, Race::White),
        supported: "white male".into(),
    }
    .into();
    assert_eq!(unsupported.code, ErrorCode::UnsupportedSubgroup);
    assert!(unsupported.message.contains("white female"));

    let internal: AppError = RiskCalculationError::NonFiniteResult.into();
    assert_eq!(internal.http_status(), 500);
}
