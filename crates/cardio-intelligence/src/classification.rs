// ABOUTME: Maps a 10-year risk percentage onto a risk tier
// ABOUTME: Fixed half-open thresholds with inclusive lower bounds

use cardio_core::models::RiskTier;
use serde::Serialize;

/// Lower bound (inclusive) of a risk tier in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThreshold {
    /// Tier starting at `lower_bound`
    pub tier: RiskTier,
    /// Inclusive lower bound in percent
    pub lower_bound: f64,
}

/// Tier thresholds in ascending order
pub const TIER_THRESHOLDS: [TierThreshold; 4] = [
    TierThreshold {
        tier: RiskTier::Low,
        lower_bound: 0.0,
    },
    TierThreshold {
        tier: RiskTier::Borderline,
        lower_bound: 5.0,
    },
    TierThreshold {
        tier: RiskTier::Intermediate,
        lower_bound: 7.5,
    },
    TierThreshold {
        tier: RiskTier::High,
        lower_bound: 20.0,
    },
];

/// Classify a risk percentage
///
/// Values below every bound (including NaN) classify as `Low`; callers
/// validate finiteness before classifying.
#[must_use]
pub fn classify(risk_percent: f64) -> RiskTier {
    TIER_THRESHOLDS
        .iter()
        .rev()
        .find(|threshold| risk_percent >= threshold.lower_bound)
        .map_or(RiskTier::Low, |threshold| threshold.tier)
}
