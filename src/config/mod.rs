// ABOUTME: Configuration module re-exported from planner-intelligence
// ABOUTME: PlannerConfig with env overrides, validation and the global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! The engine configuration is owned by `planner-intelligence`; this module
//! keeps the `calorie_planner::config` import path.

pub use planner_intelligence::config::*;
