// ABOUTME: Intelligence module re-exports from planner-intelligence crate
// ABOUTME: Pipeline stages and compute entry points under one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_intelligence::*;

pub use planner_intelligence::{
    calorie_calculator, deficit_model, energy_model, input_validator, safety_adjuster,
};
