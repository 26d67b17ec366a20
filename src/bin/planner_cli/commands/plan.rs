// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single plan command for planner-cli
// ABOUTME: Builds a PlanInput from flags, runs the engine and renders the outcome

use crate::helpers::display::{display_plan, print_json, OutputFormat};
use calorie_planner::config::PlannerConfig;
use calorie_planner::errors::{AppError, AppResult};
use calorie_planner::intelligence::compute_with_config;
use calorie_planner::logging::PlanLogger;
use calorie_planner::models::{ActivityLevel, PlanInput, Sex};
use calorie_planner::protocols::plan_outcome_response;

/// Flags of the `plan` command
pub struct PlanArgs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity: Option<ActivityLevel>,
    pub activity_factor: Option<f64>,
    pub target_days: u32,
    pub target_loss_kg: f64,
}

impl PlanArgs {
    fn to_input(&self, config: &PlannerConfig) -> PlanInput {
        let activity_factor = self.activity_factor.unwrap_or_else(|| {
            config
                .activity_factors
                .factor_for(self.activity.unwrap_or_default())
        });

        PlanInput {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            sex: self.sex,
            activity_factor,
            target_days: self.target_days,
            target_loss_kg: self.target_loss_kg,
        }
    }
}

/// Compute and print one plan
pub fn run(args: &PlanArgs, format: OutputFormat) -> AppResult<()> {
    let config = PlannerConfig::global();
    let input = args.to_input(config);

    let plan = match compute_with_config(&input, config) {
        Ok(plan) => plan,
        Err(error) => {
            PlanLogger::log_rejection("cli", &error);
            return Err(AppError::from(error));
        }
    };
    PlanLogger::log_plan("cli", &plan);

    match format {
        OutputFormat::Text => display_plan(&plan, config),
        OutputFormat::Json => print_json(&plan_outcome_response(Ok(plan)))?,
    }
    Ok(())
}
