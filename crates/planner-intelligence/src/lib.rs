// ABOUTME: Weight-loss calculation engine for the calorie planner
// ABOUTME: Input validation, energy model, deficit model, safety adjuster, and the compute pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Intelligence
//!
//! The calculation engine: a short, strictly sequential pipeline of pure
//! stages that turns a [`PlanInput`](planner_core::models::PlanInput) into a
//! [`WeightLossPlan`](planner_core::models::WeightLossPlan) or a
//! [`ValidationError`](planner_core::errors::ValidationError).
//!
//! 1. `input_validator` - rejects non-positive values and unsafe goals
//! 2. `energy_model` - Harris-Benedict BMR and TDEE
//! 3. `deficit_model` - required daily deficit and intake target
//! 4. `safety_adjuster` - floor check and safe-timeline recomputation

/// Engine configuration
pub mod config;

/// Plan request validation
pub mod input_validator;

/// BMR and TDEE estimation
pub mod energy_model;

/// Daily deficit and intake target
pub mod deficit_model;

/// Minimum-intake check and feasibility recomputation
pub mod safety_adjuster;

/// Pipeline entry points
pub mod calorie_calculator;

pub use calorie_calculator::{
    compute, compute_batch, compute_batch_with_config, compute_with_config,
};
pub use config::intelligence::{ConfigError, PlannerConfig, RoundingPolicy};
pub use deficit_model::{compute_deficit, DeficitPlan};
pub use energy_model::{calculate_bmr, calculate_tdee, compute_energy, EnergyEstimate};
pub use input_validator::validate;
pub use safety_adjuster::{assess_safety, days_at_floor, SafetyAssessment};
