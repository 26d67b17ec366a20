// ABOUTME: Error types for the calorie planner re-exported from planner-core
// ABOUTME: Single import path for AppError, ErrorCode, ValidationError and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Domain errors live in `planner-core` so the engine and its collaborators
//! share one vocabulary. Configuration errors come from `planner-intelligence`.

pub use planner_core::errors::*;
pub use planner_intelligence::config::intelligence::ConfigError;
