// ABOUTME: Domain validation of risk-factor input before the risk equation runs
// ABOUTME: Enforces the age validity domain, positive finite measurements, and HDL <= total cholesterol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use crate::error::RiskCalculationError;
use cardio_core::constants::clinical::{MAX_AGE_YEARS, MIN_AGE_YEARS};
use cardio_core::models::RiskAssessmentInput;

/// Validate input against the equation's domain
///
/// # Errors
///
/// Returns `RiskCalculationError::OutOfRange` if age falls outside 20-79 years,
/// and `RiskCalculationError::InvalidInput` if a measurement is not a finite
/// positive number or HDL exceeds total cholesterol.
pub fn validate_input(input: &RiskAssessmentInput) -> Result<(), RiskCalculationError> {
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&input.age) {
        return Err(RiskCalculationError::OutOfRange(format!(
            "age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {}",
            input.age
        )));
    }

    validate_measurement("cholesterol", input.total_cholesterol)?;
    validate_measurement("hdl", input.hdl_cholesterol)?;
    validate_measurement("bp", input.systolic_blood_pressure)?;

    if input.hdl_cholesterol > input.total_cholesterol {
        return Err(RiskCalculationError::InvalidInput(format!(
            "hdl ({}) must not exceed total cholesterol ({})",
            input.hdl_cholesterol, input.total_cholesterol
        )));
    }

    Ok(())
}

/// Check that a measurement is a finite, strictly positive number
fn validate_measurement(field: &str, value: f64) -> Result<(), RiskCalculationError> {
    if !value.is_finite() {
        return Err(RiskCalculationError::InvalidInput(format!(
            "{field} must be a finite number"
        )));
    }
    if value <= 0.0 {
        return Err(RiskCalculationError::InvalidInput(format!(
            "{field} must be positive, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardio_core::models::{Race, Sex};

    fn valid_input() -> RiskAssessmentInput {
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
    fn test_valid_input_passes() {
        assert!(validate_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_age_domain_is_inclusive() {
        for age in [20, 79] {
            let input = RiskAssessmentInput { age, ..valid_input() };
            assert!(validate_input(&input).is_ok(), "age {age}");
        }
        for age in [0, 19, 80] {
            let input = RiskAssessmentInput { age, ..valid_input() };
            assert!(matches!(
                validate_input(&input),
                Err(RiskCalculationError::OutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite_measurements() {
        let zero_bp = RiskAssessmentInput {
            systolic_blood_pressure: 0.0,
            ..valid_input()
        };
        let nan_cholesterol = RiskAssessmentInput {
            total_cholesterol: f64::NAN,
            ..valid_input()
        };
        let negative_hdl = RiskAssessmentInput {
            hdl_cholesterol: -4.0,
            ..valid_input()
        };

        for input in [zero_bp, nan_cholesterol, negative_hdl] {
            assert!(matches!(
                validate_input(&input),
                Err(RiskCalculationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_hdl_above_total_cholesterol_is_rejected() {
        let input = RiskAssessmentInput {
            hdl_cholesterol: 250.0,
            ..valid_input()
        };
        let error = validate_input(&input).unwrap_err();
        assert!(error.to_string().contains("must not exceed"));
    }
}
