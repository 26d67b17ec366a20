// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Batch command for planner-cli
// ABOUTME: Reads a JSON array of plan inputs and evaluates them in parallel

use crate::helpers::display::{display_batch, print_json, OutputFormat};
use calorie_planner::config::PlannerConfig;
use calorie_planner::errors::{AppError, AppResult, ErrorCode};
use calorie_planner::intelligence::compute_batch_with_config;
use calorie_planner::models::PlanInput;
use calorie_planner::protocols::{plan_outcome_response, HandlerResponse};
use std::fs;
use std::path::Path;
use tracing::info;

fn read_inputs(path: &Path) -> AppResult<Vec<PlanInput>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}", path.display())).with_source(e)
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{} is not a JSON array of plan inputs: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Evaluate every input in `path` and print the results in input order
///
/// Rejected requests are reported inline; only an unreadable or malformed
/// file fails the command.
pub fn run(path: &Path, format: OutputFormat) -> AppResult<()> {
    let inputs = read_inputs(path)?;
    let config = PlannerConfig::global();
    let outcomes = compute_batch_with_config(&inputs, config);
    let rejected = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    info!(total = outcomes.len(), rejected, "batch evaluated");

    match format {
        OutputFormat::Text => display_batch(&outcomes, config),
        OutputFormat::Json => {
            let responses: Vec<HandlerResponse> =
                outcomes.into_iter().map(plan_outcome_response).collect();
            print_json(&responses)?;
        }
    }

    Ok(())
}
