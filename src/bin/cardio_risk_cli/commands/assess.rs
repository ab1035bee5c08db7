// ABOUTME: Assess command for cardio-risk-cli
// ABOUTME: Parses patient arguments, runs the risk calculator, and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

use cardio_risk_server::{
    errors::{AppError, AppResult},
    intelligence::RiskScoreCalculator,
    models::{Race, RiskAssessmentInput, Sex},
    routes::RiskAssessmentResponse,
};
use clap::Args;

use crate::OutputFormat;

/// Patient risk factors
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Age in years (20-79)
    #[arg(long)]
    age: u32,

    /// Sex: male or female
    #[arg(long)]
    gender: String,

    /// Race: white, african-american, or other
    #[arg(long, default_value = "white")]
    race: String,

    /// Total cholesterol, mg/dL
    #[arg(long)]
    cholesterol: f64,

    /// HDL cholesterol, mg/dL
    #[arg(long)]
    hdl: f64,

    /// Systolic blood pressure, mmHg
    #[arg(long)]
    bp: f64,

    /// Current smoker
    #[arg(long)]
    smoker: bool,

    /// Diagnosed with diabetes
    #[arg(long)]
    diabetes: bool,

    /// Treated for hypertension
    #[arg(long)]
    on_hypertension_treatment: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl TryFrom<&AssessArgs> for RiskAssessmentInput {
    type Error = AppError;

    fn try_from(args: &AssessArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            age: args.age,
            sex: args.gender.parse::<Sex>()?,
            race: args.race.parse::<Race>()?,
            total_cholesterol: args.cholesterol,
            hdl_cholesterol: args.hdl,
            systolic_blood_pressure: args.bp,
            on_hypertension_treatment: args.on_hypertension_treatment,
            has_diabetes: args.diabetes,
            is_smoker: args.smoker,
        })
    }
}

/// Run the assessment and print it
pub fn run(args: &AssessArgs) -> AppResult<()> {
    let input = RiskAssessmentInput::try_from(args)?;
    let result = RiskScoreCalculator::default().assess(&input)?;
    let response = RiskAssessmentResponse::from(result);

    match args.format {
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&response)
                .map_err(|e| AppError::internal(format!("Failed to render JSON: {e}")))?;
            println!("{body}");
        }
        OutputFormat::Text => {
            println!("10-year ASCVD risk: {:.1}%", response.risk_score);
            println!("Risk level: {}", response.risk_level);
            println!("Recommendations:");
            for recommendation in &response.recommendations {
                println!("  - {recommendation}");
            }
        }
    }

    Ok(())
}
