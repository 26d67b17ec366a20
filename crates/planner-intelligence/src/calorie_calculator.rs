// ABOUTME: Weight-loss calorie calculation pipeline entry points
// ABOUTME: validate -> energy -> deficit -> safety, for single requests and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Calculator
//!
//! Combines the four pipeline stages into a pure function from a
//! [`PlanInput`] to a [`WeightLossPlan`]. The engine keeps no state between
//! calls; identical inputs and configuration always give identical results.
//! [`compute`] and [`compute_batch`] always use the fixed default constants;
//! tuned values only enter through the `_with_config` variants.
//!
//! Safety is decided on the reported (rounded) daily target, so the published
//! `is_safe` flag always agrees with the published `daily_calorie_target`.

use crate::config::intelligence::PlannerConfig;
use crate::deficit_model::compute_deficit;
use crate::energy_model::compute_energy;
use crate::input_validator::validate;
use crate::safety_adjuster::{assess_safety, SafetyAssessment};
use planner_core::errors::ValidationError;
use planner_core::models::{Feasibility, PlanInput, WeightLossPlan};
use rayon::prelude::*;
use tracing::{debug, warn};

fn round_kcal(value: f64) -> i64 {
    value.round() as i64
}

/// Compute a weight-loss plan with the fixed default constants
///
/// Ignores `PLANNER_*` environment overrides: the 1200 kcal/day floor,
/// 7200 kcal/kg and the 15% loss limit always apply.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any numeric input is not positive or the
/// target loss exceeds the safe fraction of body weight
pub fn compute(input: &PlanInput) -> Result<WeightLossPlan, ValidationError> {
    compute_with_config(input, &PlannerConfig::default())
}

/// Compute a weight-loss plan with an explicit configuration
///
/// # Errors
///
/// Returns a [`ValidationError`] if any numeric input is not positive or the
/// target loss exceeds the safe fraction of body weight
pub fn compute_with_config(
    input: &PlanInput,
    config: &PlannerConfig,
) -> Result<WeightLossPlan, ValidationError> {
    let input = validate(input, &config.safety).inspect_err(|error| {
        debug!(%error, "plan request rejected");
    })?;

    let energy = compute_energy(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.sex,
        input.activity_factor,
        config,
    );
    debug!(bmr = energy.bmr, tdee = energy.tdee, sex = %input.sex, "energy estimated");

    let deficit = compute_deficit(
        energy.tdee,
        input.target_loss_kg,
        input.target_days,
        &config.safety,
    );
    let daily_calorie_target = round_kcal(deficit.daily_calorie_target);

    // Finite but huge inputs can overflow to inf or NaN
    let assessment = if energy.tdee.is_finite() && deficit.daily_calorie_target.is_finite() {
        assess_safety(
            energy.tdee,
            daily_calorie_target as f64,
            deficit.total_deficit,
            input.target_days,
            &config.safety,
        )
    } else {
        warn!(
            tdee = energy.tdee,
            daily_calorie_target = deficit.daily_calorie_target,
            "plan arithmetic overflowed; marking infeasible"
        );
        SafetyAssessment {
            is_safe: false,
            feasibility: Feasibility::Infeasible {
                floor_kcal: config.safety.min_daily_intake_kcal.round() as i64,
            },
        }
    };
    debug!(
        daily_deficit = deficit.daily_deficit,
        daily_calorie_target,
        is_safe = assessment.is_safe,
        feasibility = ?assessment.feasibility,
        "plan assessed"
    );

    Ok(WeightLossPlan {
        bmr: round_kcal(energy.bmr),
        tdee: round_kcal(energy.tdee),
        total_deficit_kcal: round_kcal(deficit.total_deficit),
        daily_deficit: round_kcal(deficit.daily_deficit),
        daily_calorie_target,
        is_safe: assessment.is_safe,
        feasibility: assessment.feasibility,
        weight_kg: input.weight_kg,
        target_loss_kg: input.target_loss_kg,
        target_days: input.target_days,
    })
}

/// Compute many independent plans in parallel with the fixed default constants
///
/// Results are returned in input order.
#[must_use]
pub fn compute_batch(inputs: &[PlanInput]) -> Vec<Result<WeightLossPlan, ValidationError>> {
    compute_batch_with_config(inputs, &PlannerConfig::default())
}

/// Compute many independent plans in parallel with an explicit configuration
///
/// Results are returned in input order.
#[must_use]
pub fn compute_batch_with_config(
    inputs: &[PlanInput],
    config: &PlannerConfig,
) -> Vec<Result<WeightLossPlan, ValidationError>> {
    debug!(count = inputs.len(), "computing plan batch");
    inputs
        .par_iter()
        .map(|input| compute_with_config(input, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::RoundingPolicy;
    use planner_core::models::Sex;

    #[test]
    fn test_default_form_values() {
        let plan = compute_with_config(&PlanInput::default(), &PlannerConfig::default()).unwrap();

        assert_eq!(plan.bmr, 1671);
        assert_eq!(plan.tdee, 2005);
        assert_eq!(plan.total_deficit_kcal, 21_600);
        assert_eq!(plan.daily_deficit, 720);
        assert_eq!(plan.daily_calorie_target, 1285);
        assert!(plan.is_safe);
        assert_eq!(plan.feasible_days(), Some(30));
    }

    #[test]
    fn test_rounded_target_decides_safety() {
        // female 55/160/40 sedentary: BMR 655 + 528 + 288 - 188 = 1283, TDEE 1539.6,
        // daily deficit 1.415 * 7200 / 30 = 339.6, so the target lands on the floor
        // up to floating-point noise
        let input = PlanInput {
            weight_kg: 55.0,
            height_cm: 160.0,
            age_years: 40,
            sex: Sex::Female,
            target_days: 30,
            target_loss_kg: 1.415,
            ..PlanInput::default()
        };
        let plan = compute_with_config(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(plan.daily_calorie_target, 1200);
        assert!(plan.is_safe);
        assert_eq!(plan.feasible_days(), Some(30));
    }

    #[test]
    fn test_stagewise_policy_changes_only_rounding() {
        let stagewise = PlannerConfig {
            rounding: RoundingPolicy::Stagewise,
            ..PlannerConfig::default()
        };
        let plan = compute_with_config(&PlanInput::default(), &stagewise).unwrap();
        assert_eq!(plan.bmr, 1671);
        assert_eq!(plan.tdee, 2005);
        assert_eq!(plan.daily_calorie_target, 1285);
    }

    #[test]
    fn test_overflowing_inputs_are_infeasible() {
        let input = PlanInput {
            weight_kg: 1e308,
            target_loss_kg: 1e307,
            ..PlanInput::default()
        };
        let plan = compute_with_config(&input, &PlannerConfig::default()).unwrap();

        assert!(!plan.is_safe);
        assert_eq!(plan.feasibility, Feasibility::Infeasible { floor_kcal: 1200 });
        assert_eq!(plan.feasible_days(), None);
    }

    #[test]
    fn test_compute_uses_default_constants() {
        assert_eq!(
            compute(&PlanInput::default()),
            compute_with_config(&PlanInput::default(), &PlannerConfig::default())
        );
        let batch = compute_batch(&[PlanInput::default()]);
        assert_eq!(batch[0].as_ref().unwrap().daily_calorie_target, 1285);
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec![
            PlanInput::default(),
            PlanInput {
                age_years: 0,
                ..PlanInput::default()
            },
            PlanInput {
                target_loss_kg: 8.0,
                target_days: 20,
                ..PlanInput::default()
            },
        ];
        let results = compute_batch_with_config(&inputs, &PlannerConfig::default());

        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().is_safe);
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().unwrap().feasibility,
            Feasibility::Extended { days: 72 }
        );
    }
}
