// ABOUTME: Tiers command for cardio-risk-cli
// ABOUTME: Prints each risk tier's lower bound and its fixed recommendations

use cardio_risk_server::{
    errors::{AppError, AppResult},
    intelligence::{recommendations_for, TIER_THRESHOLDS},
};
use serde_json::json;

use crate::OutputFormat;

/// Print the tier table
pub fn run(format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let tiers: Vec<_> = TIER_THRESHOLDS
                .iter()
                .map(|threshold| {
                    json!({
                        "riskLevel": threshold.tier,
                        "lowerBound": threshold.lower_bound,
                        "recommendations": recommendations_for(threshold.tier),
                    })
                })
                .collect();
            let body = serde_json::to_string_pretty(&tiers)
                .map_err(|e| AppError::internal(format!("Failed to render JSON: {e}")))?;
            println!("{body}");
        }
        OutputFormat::Text => {
            for threshold in &TIER_THRESHOLDS {
                println!("{} (>= {:.1}%)", threshold.tier, threshold.lower_bound);
                for recommendation in recommendations_for(threshold.tier) {
                    println!("  - {recommendation}");
                }
            }
        }
    }
    Ok(())
}
