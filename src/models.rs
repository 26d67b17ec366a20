// ABOUTME: Plan data model re-exported from planner-core
// ABOUTME: PlanInput, Sex, ActivityLevel, WeightLossPlan and Feasibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_core::models::*;
