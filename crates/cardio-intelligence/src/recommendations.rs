// ABOUTME: Fixed care recommendations for each risk tier
// ABOUTME: Returned verbatim; there is no personalization

use cardio_core::models::RiskTier;

const LOW: &[&str] = &[
    "Maintain healthy lifestyle",
    "Regular physical activity",
    "Balanced diet",
];

const BORDERLINE: &[&str] = &[
    "Adopt heart-healthy diet",
    "Increase physical activity",
    "Monitor risk factors",
];

const INTERMEDIATE: &[&str] = &[
    "Consider statin therapy",
    "Encourage lifestyle changes",
    "Schedule follow-up",
];

const HIGH: &[&str] = &[
    "Initiate statin therapy",
    "Strict lifestyle modifications",
    "Frequent monitoring",
];

/// Ordered recommendations for a tier
#[must_use]
pub const fn recommendations_for(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::Low => LOW,
        RiskTier::Borderline => BORDERLINE,
        RiskTier::Intermediate => INTERMEDIATE,
        RiskTier::High => HIGH,
    }
}
