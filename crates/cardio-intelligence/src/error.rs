// ABOUTME: Error types for risk calculation
// ABOUTME: Distinguishes invalid input, unsupported subgroups, and non-finite results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use crate::algorithms::Subgroup;
use cardio_core::errors::AppError;
use thiserror::Error;

/// Risk calculation errors
///
/// All variants are terminal for the request: the computation is
/// deterministic, so retrying unchanged input yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskCalculationError {
    /// A field is missing, mistyped, or violates a domain rule
    #[error("{0}")]
    InvalidInput(String),

    /// A numeric field lies outside its accepted range
    #[error("{0}")]
    OutOfRange(String),

    /// No coefficient set exists for the requested subgroup
    #[error("Risk calculation is not implemented for {subgroup} patients; supported subgroups: {supported}")]
    UnsupportedSubgroup {
        /// Requested subgroup
        subgroup: Subgroup,
        /// Comma-separated list of supported subgroups
        supported: String,
    },

    /// The equation produced NaN or infinity
    #[error("Risk computation produced a non-finite value")]
    NonFiniteResult,
}

impl RiskCalculationError {
    /// Whether the caller's input caused the error
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::OutOfRange(_))
    }
}

impl From<RiskCalculationError> for AppError {
    fn from(error: RiskCalculationError) -> Self {
        let message = error.to_string();
        match error {
            RiskCalculationError::InvalidInput(_) => Self::invalid_input(message),
            RiskCalculationError::OutOfRange(_) => Self::value_out_of_range(message),
            RiskCalculationError::UnsupportedSubgroup { .. } => {
                Self::unsupported_subgroup(message)
            }
            RiskCalculationError::NonFiniteResult => Self::internal(message),
        }
    }
}
