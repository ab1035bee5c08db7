// ABOUTME: Pooled Cohort Equation for 10-year atherosclerotic cardiovascular disease risk
// ABOUTME: Coefficient bundles keyed by (sex, race) and the survival-based risk formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use cardio_core::models::{Race, RiskAssessmentInput, Sex};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Demographic subgroup selecting a coefficient bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subgroup {
    /// Biological sex
    pub sex: Sex,
    /// Race category
    pub race: Race,
}

impl Subgroup {
    /// Create a subgroup key
    #[must_use]
    pub const fn new(sex: Sex, race: Race) -> Self {
        Self { sex, race }
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.race, self.sex)
    }
}

/// Regression coefficients of the Pooled Cohort Equation for one subgroup
///
/// The weighted sum is
///
/// ```text
/// Σ = c_age·ln(age) + c_tc·ln(TC) + c_age_tc·ln(age)·ln(TC)
///   + c_hdl·ln(HDL) + c_age_hdl·ln(age)·ln(HDL)
///   + c_sbp·ln(SBP)            (treated or untreated coefficient)
///   + c_smoker·smoker + c_age_smoker·ln(min(age, 70))·smoker
///   + c_diabetes·diabetes
/// ```
///
/// and the 10-year risk is `1 - S₀^exp(Σ - mean)`.
///
/// # Scientific References
///
/// - Goff, D.C. et al. (2014). "2013 ACC/AHA guideline on the assessment of cardiovascular risk."
///   *Circulation*, 129(25 Suppl 2), S49-S73.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PooledCohortCoefficients {
    /// ln(age)
    pub ln_age: f64,
    /// ln(total cholesterol)
    pub ln_total_cholesterol: f64,
    /// ln(age) × ln(total cholesterol)
    pub ln_age_x_ln_total_cholesterol: f64,
    /// ln(HDL cholesterol)
    pub ln_hdl: f64,
    /// ln(age) × ln(HDL cholesterol)
    pub ln_age_x_ln_hdl: f64,
    /// ln(systolic BP) when treated for hypertension
    pub ln_treated_sbp: f64,
    /// ln(systolic BP) when untreated
    pub ln_untreated_sbp: f64,
    /// Current smoker
    pub smoker: f64,
    /// ln(age) × current smoker, with age capped at [`SMOKER_INTERACTION_AGE_CAP`]
    pub ln_age_x_smoker: f64,
    /// Diabetes
    pub diabetes: f64,
    /// Population mean of the weighted sum
    pub mean_coefficient_sum: f64,
    /// Baseline 10-year survival probability
    pub baseline_survival: f64,
}

/// Oldest age fed into the smoker interaction term
///
/// Past this age the uncapped term would make smoking lower the estimate.
pub const SMOKER_INTERACTION_AGE_CAP: u32 = 70;

/// Published coefficients for white men
pub const WHITE_MALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 12.344,
    ln_total_cholesterol: 11.853,
    ln_age_x_ln_total_cholesterol: -2.664,
    ln_hdl: -7.990,
    ln_age_x_ln_hdl: 1.769,
    ln_treated_sbp: 1.797,
    ln_untreated_sbp: 1.764,
    smoker: 7.837,
    ln_age_x_smoker: -1.795,
    diabetes: 0.658,
    mean_coefficient_sum: 61.18,
    baseline_survival: 0.9144,
};

impl PooledCohortCoefficients {
    /// Weighted sum of the regression terms for the given risk factors
    ///
    /// Inputs must already be validated: every logarithm argument is assumed
    /// finite and strictly positive.
    #[must_use]
    pub fn weighted_sum(&self, input: &RiskAssessmentInput) -> f64 {
        let ln_age = f64::from(input.age).ln();
        let ln_smoker_age = f64::from(input.age.min(SMOKER_INTERACTION_AGE_CAP)).ln();
        let ln_total_cholesterol = input.total_cholesterol.ln();
        let ln_hdl = input.hdl_cholesterol.ln();
        let ln_sbp = input.systolic_blood_pressure.ln();

        let sbp_coefficient = if input.on_hypertension_treatment {
            self.ln_treated_sbp
        } else {
            self.ln_untreated_sbp
        };
        let smoker = indicator(input.is_smoker);
        let diabetes = indicator(input.has_diabetes);

        [
            self.ln_age * ln_age,
            self.ln_total_cholesterol * ln_total_cholesterol,
            self.ln_age_x_ln_total_cholesterol * ln_age * ln_total_cholesterol,
            self.ln_hdl * ln_hdl,
            self.ln_age_x_ln_hdl * ln_age * ln_hdl,
            sbp_coefficient * ln_sbp,
            self.smoker * smoker,
            self.ln_age_x_smoker * ln_smoker_age * smoker,
            self.diabetes * diabetes,
        ]
        .iter()
        .sum()
    }

    /// 10-year risk as a fraction
    ///
    /// Mathematically within [0, 1]; callers still clamp because `exp` can
    /// overflow for extreme sums.
    #[must_use]
    pub fn ten_year_risk(&self, input: &RiskAssessmentInput) -> f64 {
        let relative_hazard = (self.weighted_sum(input) - self.mean_coefficient_sum).exp();
        1.0 - self.baseline_survival.powf(relative_hazard)
    }
}

const fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Coefficient bundles keyed by demographic subgroup
///
/// A missing key means the subgroup is not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    entries: HashMap<Subgroup, PooledCohortCoefficients>,
}

impl CoefficientTable {
    /// Table with no subgroups
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Table with every subgroup this service implements
    #[must_use]
    pub fn published() -> Self {
        Self::empty().with_subgroup(Subgroup::new(Sex::Male, Race::White), WHITE_MALE)
    }

    /// Add or replace the coefficients for a subgroup
    #[must_use]
    pub fn with_subgroup(
        mut self,
        subgroup: Subgroup,
        coefficients: PooledCohortCoefficients,
    ) -> Self {
        self.entries.insert(subgroup, coefficients);
        self
    }

    /// Coefficients for a subgroup, if supported
    #[must_use]
    pub fn lookup(&self, subgroup: Subgroup) -> Option<&PooledCohortCoefficients> {
        self.entries.get(&subgroup)
    }

    /// Supported subgroups in a stable order
    #[must_use]
    pub fn subgroups(&self) -> Vec<Subgroup> {
        let mut subgroups: Vec<Subgroup> = self.entries.keys().copied().collect();
        subgroups.sort_by_key(|s| (s.sex.as_str(), s.race.as_str()));
        subgroups
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self::published()
    }
}
