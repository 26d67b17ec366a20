// ABOUTME: Main library entry point for the weight-loss calorie planner
// ABOUTME: Re-exports the engine and adds logging, JSON handlers and the CLI support code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Planner
//!
//! Computes a personalized daily calorie target for a weight-loss goal, flags
//! plans that fall below a minimum safe intake, and offers a longer timeline
//! that keeps intake at the floor.
//!
//! ## Architecture
//!
//! - **`planner-core`**: data model, constants and error types
//! - **`planner-intelligence`**: the validation, energy, deficit and safety stages
//! - **this crate**: logging setup, JSON handlers and the `planner-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use calorie_planner::intelligence::compute_with_config;
//! use calorie_planner::config::PlannerConfig;
//! use calorie_planner::models::PlanInput;
//!
//! let plan = compute_with_config(&PlanInput::default(), &PlannerConfig::default())?;
//! assert_eq!(plan.daily_calorie_target, 1285);
//! assert!(plan.is_safe);
//! # Ok::<(), calorie_planner::errors::ValidationError>(())
//! ```

/// Engine configuration
pub mod config;

/// Physiological and service constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Calculation engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Plan data model
pub mod models;

/// JSON request handlers
pub mod protocols;

pub use intelligence::{compute, compute_batch, compute_with_config};
pub use models::{ActivityLevel, Feasibility, PlanInput, Sex, WeightLossPlan};
