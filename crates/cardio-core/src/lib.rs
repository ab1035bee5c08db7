// ABOUTME: Core types and constants for the cardio risk assessment service
// ABOUTME: Foundation crate with error handling, patient models, and clinical constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

#![deny(unsafe_code)]

//! # Cardio Core
//!
//! Foundation crate providing shared types and constants for the cardio risk
//! assessment service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service names, HTTP defaults, and clinical validity limits
//! - **models**: Patient risk-factor input and assessment result value objects

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Risk assessment data models (`RiskAssessmentInput`, `RiskTier`, etc.)
pub mod models;
