// ABOUTME: JSON request handlers for weight-loss plan calculation and activity level listing
// ABOUTME: Parses loosely typed parameters into PlanInput, calls the engine, and wraps the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ErrorCode, ErrorResponse, ErrorResponseDetails};
use crate::logging::PlanLogger;
use planner_core::errors::ValidationError;
use planner_core::models::{ActivityLevel, PlanInput, Sex, WeightLossPlan};
use planner_intelligence::{compute_with_config, PlannerConfig};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const SOURCE: &str = "json";

/// Uniform envelope returned by every handler
#[derive(Debug, Serialize, Deserialize)]
pub struct HandlerResponse {
    /// Whether the request produced a result
    pub success: bool,
    /// Result payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponseDetails>,
}

impl HandlerResponse {
    /// Successful response carrying `result`
    #[must_use]
    pub const fn ok(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Failed response carrying the error code, message and details
    #[must_use]
    pub fn from_error(error: AppError) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(ErrorResponse::from(error).error),
        }
    }
}

fn required<'a>(params: &'a Value, name: &str) -> Result<&'a Value, AppError> {
    match params.get(name) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(AppError::missing_field(name)),
    }
}

fn invalid_format(name: &str, expected: &str) -> AppError {
    AppError::new(
        ErrorCode::InvalidFormat,
        format!("Parameter {name} must be {expected}"),
    )
    .with_details(json!({ "field": name }))
}

fn parse_f64(params: &Value, name: &str) -> Result<f64, AppError> {
    required(params, name)?
        .as_f64()
        .ok_or_else(|| invalid_format(name, "a number"))
}

/// Whole-number counts; negatives become 0 so the engine reports them as non-positive
fn parse_count(params: &Value, name: &str) -> Result<u32, AppError> {
    let value = required(params, name)?
        .as_i64()
        .ok_or_else(|| invalid_format(name, "a whole number"))?;
    u32::try_from(value.max(0))
        .map_err(|_| invalid_format(name, "a whole number of days or years"))
}

fn parse_sex(params: &Value) -> Result<Sex, AppError> {
    required(params, "sex")?
        .as_str()
        .ok_or_else(|| invalid_format("sex", "a string"))?
        .parse::<Sex>()
        .map_err(|message| {
            AppError::new(ErrorCode::InvalidFormat, message).with_details(json!({ "field": "sex" }))
        })
}

fn parse_activity_factor(params: &Value, config: &PlannerConfig) -> Result<f64, AppError> {
    if let Some(level) = params.get("activity_level").filter(|v| !v.is_null()) {
        let level = level
            .as_str()
            .ok_or_else(|| invalid_format("activity_level", "a string"))?
            .parse::<ActivityLevel>()
            .map_err(|message| {
                AppError::new(ErrorCode::InvalidFormat, message)
                    .with_details(json!({ "field": "activity_level" }))
            })?;
        return Ok(config.activity_factors.factor_for(level));
    }

    match params.get("activity_factor") {
        Some(value) if !value.is_null() => value
            .as_f64()
            .ok_or_else(|| invalid_format("activity_factor", "a number")),
        _ => Err(AppError::missing_field("activity_level")),
    }
}

/// Build a [`PlanInput`] from loosely typed request parameters
///
/// # Errors
///
/// Returns an error if a parameter is missing or has the wrong type. Value
/// checks (positivity, safe loss) are left to the engine.
pub fn parse_plan_input(params: &Value, config: &PlannerConfig) -> Result<PlanInput, AppError> {
    Ok(PlanInput {
        weight_kg: parse_f64(params, "weight_kg")?,
        height_cm: parse_f64(params, "height_cm")?,
        age_years: parse_count(params, "age_years")?,
        sex: parse_sex(params)?,
        activity_factor: parse_activity_factor(params, config)?,
        target_days: parse_count(params, "target_days")?,
        target_loss_kg: parse_f64(params, "target_loss_kg")?,
    })
}

fn plan_result(plan: &WeightLossPlan) -> Result<Value, AppError> {
    let mut result = serde_json::to_value(plan)?;
    if let Some(fields) = result.as_object_mut() {
        fields.insert("feasible_days".to_owned(), json!(plan.feasible_days()));
    }
    Ok(result)
}

/// Wrap an engine outcome in a [`HandlerResponse`]
#[must_use]
pub fn plan_outcome_response(outcome: Result<WeightLossPlan, ValidationError>) -> HandlerResponse {
    match outcome {
        Ok(plan) => {
            plan_result(&plan).map_or_else(HandlerResponse::from_error, HandlerResponse::ok)
        }
        Err(error) => HandlerResponse::from_error(error.into()),
    }
}

/// Handle a plan calculation request using the global configuration
#[must_use]
pub fn handle_calculate_plan(params: &Value) -> HandlerResponse {
    handle_calculate_plan_with_config(params, PlannerConfig::global())
}

/// Handle a plan calculation request with an explicit configuration
#[must_use]
pub fn handle_calculate_plan_with_config(
    params: &Value,
    config: &PlannerConfig,
) -> HandlerResponse {
    let input = match parse_plan_input(params, config) {
        Ok(input) => input,
        Err(error) => return HandlerResponse::from_error(error),
    };

    let outcome = compute_with_config(&input, config);
    match &outcome {
        Ok(plan) => PlanLogger::log_plan(SOURCE, plan),
        Err(error) => PlanLogger::log_rejection(SOURCE, error),
    }
    plan_outcome_response(outcome)
}

/// List the activity levels with their configured multipliers
#[must_use]
pub fn handle_list_activity_levels() -> HandlerResponse {
    let factors = &PlannerConfig::global().activity_factors;
    let levels: Vec<Value> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            json!({
                "id": level,
                "label": level.label(),
                "description": level.description(),
                "factor": factors.factor_for(*level),
            })
        })
        .collect();

    HandlerResponse::ok(json!({ "activity_levels": levels }))
}
