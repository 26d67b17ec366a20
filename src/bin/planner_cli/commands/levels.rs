// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Activity level listing command for planner-cli
// ABOUTME: Prints each level with its configured multiplier

use crate::helpers::display::{display_activity_levels, print_json, OutputFormat};
use calorie_planner::config::PlannerConfig;
use calorie_planner::errors::AppResult;
use calorie_planner::protocols::handle_list_activity_levels;

/// Print the activity level table
pub fn run(format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            display_activity_levels(&PlannerConfig::global().activity_factors);
            Ok(())
        }
        OutputFormat::Json => print_json(&handle_list_activity_levels()),
    }
}
