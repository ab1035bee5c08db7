// ABOUTME: Patient risk-factor models used as input to the ASCVD risk equation
// ABOUTME: Defines Sex, Race, and the RiskAssessmentInput value object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex as used by the Pooled Cohort Equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male coefficient sets
    Male,
    /// Female coefficient sets
    Female,
}

impl Sex {
    /// Wire name of this sex
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Race category as used by the Pooled Cohort Equations
///
/// The published equations only distinguish white and African-American
/// cohorts; every other self-reported race is grouped under `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Race {
    /// White cohort (the default when a caller omits race)
    #[default]
    White,
    /// African-American cohort
    AfricanAmerican,
    /// Any race without a dedicated cohort
    Other,
}

impl Race {
    /// Wire name of this race category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::AfricanAmerican => "african-american",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Err(AppError::invalid_input("Race must not be empty")),
            "white" => Ok(Self::White),
            "african-american" | "african_american" | "black" => Ok(Self::AfricanAmerican),
            _ => Ok(Self::Other),
        }
    }
}

/// Risk factors for a single 10-year ASCVD risk assessment
///
/// Cholesterol values are in mg/dL, blood pressure in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentInput {
    /// Age in whole years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Race category
    pub race: Race,
    /// Total cholesterol (mg/dL)
    pub total_cholesterol: f64,
    /// HDL cholesterol (mg/dL)
    pub hdl_cholesterol: f64,
    /// Systolic blood pressure (mmHg)
    pub systolic_blood_pressure: f64,
    /// Currently treated for hypertension
    pub on_hypertension_treatment: bool,
    /// Diagnosed with diabetes
    pub has_diabetes: bool,
    /// Current smoker
    pub is_smoker: bool,
}
