// ABOUTME: Configuration module for planner-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (formula coefficients, activity factors, safety limits, rounding)
pub mod intelligence;

pub use intelligence::PlannerConfig;
