// ABOUTME: ASCVD risk engine for the cardio risk assessment service
// ABOUTME: Pooled Cohort Equation, tier classification, recommendations, and the calculator facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

#![deny(unsafe_code)]

//! # Cardio Intelligence
//!
//! Pure, synchronous risk computation. Nothing in this crate performs I/O or
//! holds mutable state, so a single [`RiskScoreCalculator`] can be shared
//! across any number of concurrent requests.
//!
//! ```rust,no_run
//! use cardio_core::models::{Race, RiskAssessmentInput, Sex};
//! use cardio_intelligence::RiskScoreCalculator;
//!
//! let input = RiskAssessmentInput {
//!     age: 55,
//!     sex: Sex::Male,
//!     race: Race::White,
//!     total_cholesterol: 213.0,
//!     hdl_cholesterol: 50.0,
//!     systolic_blood_pressure: 120.0,
//!     on_hypertension_treatment: false,
//!     has_diabetes: false,
//!     is_smoker: false,
//! };
//! let result = RiskScoreCalculator::default().assess(&input)?;
//! println!("{}% ({})", result.risk_percent, result.risk_tier);
//! # Ok::<(), cardio_intelligence::RiskCalculationError>(())
//! ```

/// Risk equations and their coefficient tables
pub mod algorithms;

/// Validate, compute, and classify in one call
pub mod calculator;

/// Risk percentage to tier mapping
pub mod classification;

/// Error types for risk calculation
pub mod error;

/// Tier-specific recommendation table
pub mod recommendations;

/// Domain validation of risk-factor input
pub mod validation;

pub use algorithms::{CoefficientTable, PooledCohortCoefficients, Subgroup};
pub use calculator::RiskScoreCalculator;
pub use classification::{classify, TierThreshold, TIER_THRESHOLDS};
pub use error::RiskCalculationError;
pub use recommendations::recommendations_for;
