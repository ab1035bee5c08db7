// ABOUTME: Risk assessment output models
// ABOUTME: Defines the RiskTier buckets and the RiskAssessmentResult value object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse risk bucket driving generic care recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    /// Below 5%
    Low,
    /// 5% up to 7.5%
    Borderline,
    /// 7.5% up to 20%
    Intermediate,
    /// 20% and above
    High,
}

impl RiskTier {
    /// All tiers in ascending order of risk
    pub const ALL: [Self; 4] = [Self::Low, Self::Borderline, Self::Intermediate, Self::High];

    /// Display name of this tier
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Borderline => "Borderline",
            Self::Intermediate => "Intermediate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessmentResult {
    /// 10-year risk in percent, one decimal place, within [0, 100]
    pub risk_percent: f64,
    /// Tier derived from `risk_percent`
    pub risk_tier: RiskTier,
    /// Fixed recommendations for `risk_tier`
    pub recommendations: &'static [&'static str],
}
