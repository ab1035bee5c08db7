// ABOUTME: Cardio Risk CLI - one-shot ASCVD risk calculation from the command line
// ABOUTME: Runs the same calculator as the HTTP service and prints the result or the tier table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors
//!
//! Usage:
//! ```bash
//! # Assess a patient, text output
//! cardio-risk-cli assess --age 55 --gender male --cholesterol 213 --hdl 50 --bp 120
//!
//! # Smoker on blood pressure medication, JSON output
//! cardio-risk-cli assess --age 55 --gender male --cholesterol 213 --hdl 50 --bp 120 \
//!     --smoker --on-hypertension-treatment --format json
//!
//! # Show tier thresholds and recommendations
//! cardio-risk-cli tiers
//! ```

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "cardio-risk-cli",
    about = "Cardio Risk CLI",
    long_about = "Estimate 10-year ASCVD risk with the Pooled Cohort Equations and show risk tiers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output rendering
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Same body as the HTTP endpoint
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate 10-year risk for one patient
    Assess(commands::assess::AssessArgs),

    /// Print tier thresholds and their recommendations
    Tiers {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = cardio_risk_server::logging::LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: logging unavailable: {e}");
    }
    debug!("Cardio Risk CLI");

    let result = match cli.command {
        Command::Assess(args) => commands::assess::run(&args),
        Command::Tiers { format } => commands::tiers::run(format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
