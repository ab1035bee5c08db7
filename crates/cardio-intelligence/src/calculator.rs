// ABOUTME: Risk score calculator combining validation, the risk equation, and classification
// ABOUTME: Single-shot, stateless computation of a RiskAssessmentResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! # Risk Score Calculator
//!
//! Validates a [`RiskAssessmentInput`], looks up the coefficient bundle for its
//! subgroup, evaluates the Pooled Cohort Equation, and classifies the rounded
//! percentage. Either a complete result or an error is returned; there are no
//! partial answers.

use crate::algorithms::{CoefficientTable, Subgroup};
use crate::classification::classify;
use crate::error::RiskCalculationError;
use crate::recommendations::recommendations_for;
use crate::validation::validate_input;
use cardio_core::constants::clinical::MAX_RISK_PERCENT;
use cardio_core::models::{RiskAssessmentInput, RiskAssessmentResult};
use tracing::debug;

/// Computes 10-year ASCVD risk for supported subgroups
#[derive(Debug, Clone, Default)]
pub struct RiskScoreCalculator {
    coefficients: CoefficientTable,
}

impl RiskScoreCalculator {
    /// Create a calculator over a custom coefficient table
    #[must_use]
    pub const fn new(coefficients: CoefficientTable) -> Self {
        Self { coefficients }
    }

    /// Assess a patient's 10-year risk
    ///
    /// # Errors
    ///
    /// - `InvalidInput` / `OutOfRange` if the input violates the equation's domain
    /// - `UnsupportedSubgroup` if no coefficients exist for the sex/race combination
    /// - `NonFiniteResult` if the equation yields NaN or infinity
    pub fn assess(
        &self,
        input: &RiskAssessmentInput,
    ) -> Result<RiskAssessmentResult, RiskCalculationError> {
        validate_input(input)?;

        let subgroup = Subgroup::new(input.sex, input.race);
        let coefficients = self.coefficients.lookup(subgroup).ok_or_else(|| {
            RiskCalculationError::UnsupportedSubgroup {
                subgroup,
                supported: self.supported_subgroups(),
            }
        })?;

        let risk_percent = to_rounded_percent(coefficients.ten_year_risk(input))
            .ok_or(RiskCalculationError::NonFiniteResult)?;
        let risk_tier = classify(risk_percent);

        debug!(
            subgroup = %subgroup,
            risk.percent = risk_percent,
            risk.tier = %risk_tier,
            "Computed ASCVD risk"
        );

        Ok(RiskAssessmentResult {
            risk_percent,
            risk_tier,
            recommendations: recommendations_for(risk_tier),
        })
    }

    fn supported_subgroups(&self) -> String {
        let names: Vec<String> = self
            .coefficients
            .subgroups()
            .iter()
            .map(ToString::to_string)
            .collect();
        if names.is_empty() {
            "none".to_owned()
        } else {
            names.join(", ")
        }
    }
}

/// Convert a risk fraction into a percentage with one decimal place, clamped to [0, 100]
///
/// Returns `None` for NaN or infinite input.
#[must_use]
pub fn to_rounded_percent(risk_fraction: f64) -> Option<f64> {
    if !risk_fraction.is_finite() {
        return None;
    }
    let percent = (risk_fraction * 1000.0).round() / 10.0;
    Some(percent.clamp(0.0, MAX_RISK_PERCENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardio_core::models::{Race, RiskTier, Sex};

    fn reference_input() -> RiskAssessmentInput {
        RiskAssessmentInput {
            age: 55,
            sex: Sex::Male,
            race: Race::White,
            total_cholesterol: 213.0,
            hdl_cholesterol: 50.0,
            systolic_blood_pressure: 120.0,
            on_hypertension_treatment: false,
            has_diabetes: false,
            is_smoker: false,
        }
    }

    #[test]
    fn test_reference_patient_is_borderline() {
        let result = RiskScoreCalculator::default()
            .assess(&reference_input())
            .unwrap();

        assert!((result.risk_percent - 5.4).abs() < f64::EPSILON);
        assert_eq!(result.risk_tier, RiskTier::Borderline);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn test_unsupported_subgroup_names_supported_ones() {
        let input = RiskAssessmentInput {
            sex: Sex::Female,
            ..reference_input()
        };
        let error = RiskScoreCalculator::default().assess(&input).unwrap_err();

        assert!(matches!(
            error,
            RiskCalculationError::UnsupportedSubgroup { .. }
        ));
        assert!(error.to_string().contains("white female"));
        assert!(error.to_string().contains("white male"));
    }

    #[test]
    fn test_empty_table_supports_nothing() {
        let calculator = RiskScoreCalculator::new(CoefficientTable::empty());
        let error = calculator.assess(&reference_input()).unwrap_err();
        assert!(error.to_string().ends_with("supported subgroups: none"));
    }

    #[test]
    fn test_validation_runs_before_subgroup_lookup() {
        let input = RiskAssessmentInput {
            sex: Sex::Female,
            hdl_cholesterol: -1.0,
            ..reference_input()
        };
        let error = RiskScoreCalculator::default().assess(&input).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_rounding_and_clamping() {
        assert_eq!(to_rounded_percent(0.053_844), Some(5.4));
        assert_eq!(to_rounded_percent(0.000_4), Some(0.0));
        assert_eq!(to_rounded_percent(1.2), Some(100.0));
        assert_eq!(to_rounded_percent(-0.3), Some(0.0));
        assert_eq!(to_rounded_percent(f64::NAN), None);
        assert_eq!(to_rounded_percent(f64::INFINITY), None);
    }
}
