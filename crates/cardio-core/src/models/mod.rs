// ABOUTME: Data models for cardiovascular risk assessment
// ABOUTME: Re-exports patient risk factors and assessment result value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! # Data Models
//!
//! Immutable value objects created per assessment request. Nothing here is
//! cached or persisted.

/// Patient risk-factor input (`Sex`, `Race`, `RiskAssessmentInput`)
pub mod patient;

/// Assessment output (`RiskTier`, `RiskAssessmentResult`)
pub mod assessment;

pub use assessment::{RiskAssessmentResult, RiskTier};
pub use patient::{Race, RiskAssessmentInput, Sex};
