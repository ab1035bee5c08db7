// ABOUTME: Unified error handling for the Cardio Risk API service
// ABOUTME: Re-exports the error system from cardio-core so handlers and binaries share one type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! # Unified Error Handling System
//!
//! Error codes, `AppError`, and the JSON error body live in `cardio-core`.
//! With the `http-response` feature enabled, `AppError` renders itself as an
//! HTTP response, so route handlers simply return `Result<_, AppError>`.

pub use cardio_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
