// ABOUTME: Protocol layer exposing the planner through JSON request handlers
// ABOUTME: Parameter parsing, engine invocation and uniform response envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON handlers for plan calculation and activity level listing
pub mod handlers;

pub use handlers::{
    handle_calculate_plan, handle_calculate_plan_with_config, handle_list_activity_levels,
    plan_outcome_response, HandlerResponse,
};
