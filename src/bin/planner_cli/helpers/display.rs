// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for planner-cli
// ABOUTME: Renders plans, batches, activity levels and errors as text or JSON

use calorie_planner::config::intelligence::ActivityFactorsConfig;
use calorie_planner::config::PlannerConfig;
use calorie_planner::errors::{
    AppError, AppResult, ErrorResponse, ErrorResponseDetails, ValidationError,
};
use calorie_planner::models::{ActivityLevel, Feasibility, WeightLossPlan};
use clap::ValueEnum;
use serde::Serialize;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable panel
    Text,
    /// Machine-readable JSON on stdout
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a computed plan
pub fn display_plan(plan: &WeightLossPlan, config: &PlannerConfig) {
    let floor = config.safety.min_daily_intake_kcal;

    println!("\nWeight-Loss Plan");
    println!("{}", "=".repeat(50));
    println!("   BMR: {} kcal/day", plan.bmr);
    println!("   TDEE: {} kcal/day", plan.tdee);
    println!("   Daily deficit: {} kcal/day", plan.daily_deficit);
    println!(
        "      ({} kg x {} kcal/kg = {} kcal over {} days)",
        plan.target_loss_kg, config.safety.kcal_per_kg, plan.total_deficit_kcal, plan.target_days
    );
    println!("   Daily calorie target: {} kcal/day", plan.daily_calorie_target);

    match plan.feasibility {
        Feasibility::OnSchedule { days } => {
            println!("\n   Safe plan: goal reached in {days} days.");
        }
        Feasibility::Extended { days } => {
            println!("\nWARNING: this target is below the {floor} kcal/day minimum intake.");
            println!("   A safer timeline at {floor} kcal/day takes {days} days.");
            println!("   Or set a smaller weight-loss goal for {} days.", plan.target_days);
        }
        Feasibility::Infeasible { floor_kcal } => {
            println!("\nWARNING: this target is below the {floor_kcal} kcal/day minimum intake.");
            println!(
                "   No feasible plan: daily expenditure does not exceed {floor_kcal} kcal/day."
            );
            println!("   Set a smaller weight-loss goal or raise your activity level.");
        }
    }
}

/// Display batch results in input order
pub fn display_batch(outcomes: &[Result<WeightLossPlan, ValidationError>], config: &PlannerConfig) {
    for (index, outcome) in outcomes.iter().enumerate() {
        println!("\nRequest #{}", index + 1);
        match outcome {
            Ok(plan) => display_plan(plan, config),
            Err(error) => println!("   Rejected: {error}"),
        }
    }
}

/// Display the activity level table
pub fn display_activity_levels(factors: &ActivityFactorsConfig) {
    println!("\nActivity Levels");
    println!("{}", "=".repeat(50));
    for level in ActivityLevel::ALL {
        println!(
            "   {:<12} x{:<6} {}",
            level.label(),
            factors.factor_for(level),
            level.description()
        );
    }
}

/// Display a command failure: JSON envelope on stdout, or a message on stderr
pub fn display_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse {
                error: ErrorResponseDetails {
                    code: error.code,
                    message: error.message.clone(),
                    details: error.details.clone(),
                },
            };
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(_) => eprintln!("Error: {error}"),
            }
        }
        OutputFormat::Text => eprintln!("Error: {error}"),
    }
}
