// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors
// ABOUTME: Re-exports command modules for cardio-risk-cli
// ABOUTME: Provides the assess and tiers subcommands

pub mod assess;
pub mod tiers;
