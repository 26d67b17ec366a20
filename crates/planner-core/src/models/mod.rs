// ABOUTME: Plan data model for the calorie planner
// ABOUTME: Re-exports the input record, output record, and activity-level table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `PlanInput`: immutable request built by a collaborator
//! - `WeightLossPlan`: the engine's result record
//! - `Feasibility`: safe timeline, or an explicit no-safe-plan marker
//! - `ActivityLevel`: closed lookup table of TDEE multipliers

mod activity_level;
mod plan;

pub use activity_level::ActivityLevel;
pub use plan::{Feasibility, PlanInput, Sex, WeightLossPlan};
