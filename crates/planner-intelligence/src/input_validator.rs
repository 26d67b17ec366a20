// ABOUTME: Input validation for weight-loss plan requests
// ABOUTME: Rejects non-positive inputs and target losses above the safe fraction of body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input Validator
//!
//! Runs before any energy computation. Positivity is checked first; the
//! safe-loss limit is only evaluated for inputs that are otherwise usable.

use crate::config::intelligence::SafetyConfig;
use planner_core::errors::{InputField, ValidationError};
use planner_core::models::PlanInput;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round to one decimal place, as shown to users
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Largest safe target loss for a body weight, in kilograms (unrounded)
#[must_use]
pub fn max_safe_loss_kg(weight_kg: f64, safety: &SafetyConfig) -> f64 {
    weight_kg * safety.max_loss_fraction
}

/// Validate a plan request
///
/// # Errors
///
/// - [`ValidationError::NonPositiveInput`] if weight, height, age, activity
///   factor, target days, or target loss is zero, negative, or not finite
/// - [`ValidationError::UnsafeTargetLoss`] if the target loss exceeds the safe
///   fraction of body weight; the limit is reported rounded to one decimal
pub fn validate<'a>(
    input: &'a PlanInput,
    safety: &SafetyConfig,
) -> Result<&'a PlanInput, ValidationError> {
    let checks = [
        (InputField::WeightKg, is_positive(input.weight_kg)),
        (InputField::HeightCm, is_positive(input.height_cm)),
        (InputField::AgeYears, input.age_years > 0),
        (InputField::ActivityFactor, is_positive(input.activity_factor)),
        (InputField::TargetDays, input.target_days > 0),
        (InputField::TargetLossKg, is_positive(input.target_loss_kg)),
    ];
    let fields: Vec<InputField> = checks
        .into_iter()
        .filter_map(|(field, ok)| (!ok).then_some(field))
        .collect();
    if !fields.is_empty() {
        return Err(ValidationError::NonPositiveInput { fields });
    }

    let limit = max_safe_loss_kg(input.weight_kg, safety);
    if input.target_loss_kg > limit {
        return Err(ValidationError::UnsafeTargetLoss {
            target_loss_kg: input.target_loss_kg,
            limit_kg: round_to_tenth(limit),
        });
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safety() -> SafetyConfig {
        SafetyConfig::default()
    }

    #[test]
    fn test_defaults_pass() {
        let input = PlanInput::default();
        assert!(validate(&input, &safety()).is_ok());
    }

    #[test]
    fn test_zero_age_is_rejected() {
        let input = PlanInput {
            age_years: 0,
            ..PlanInput::default()
        };
        assert_eq!(
            validate(&input, &safety()),
            Err(ValidationError::NonPositiveInput {
                fields: vec![InputField::AgeYears]
            })
        );
    }

    #[test]
    fn test_all_offending_fields_are_reported() {
        let input = PlanInput {
            weight_kg: -1.0,
            target_days: 0,
            target_loss_kg: f64::NAN,
            ..PlanInput::default()
        };
        let Err(ValidationError::NonPositiveInput { fields }) = validate(&input, &safety()) else {
            panic!("expected NonPositiveInput");
        };
        assert_eq!(
            fields,
            vec![
                InputField::WeightKg,
                InputField::TargetDays,
                InputField::TargetLossKg
            ]
        );
    }

    #[test]
    fn test_positivity_is_checked_before_loss_limit() {
        // 20 kg would also exceed 15% of 70 kg, but height is checked first
        let input = PlanInput {
            height_cm: 0.0,
            target_loss_kg: 20.0,
            ..PlanInput::default()
        };
        assert!(matches!(
            validate(&input, &safety()),
            Err(ValidationError::NonPositiveInput { .. })
        ));
    }

    #[test]
    fn test_loss_above_limit_reports_rounded_limit() {
        let input = PlanInput {
            target_loss_kg: 12.0,
            ..PlanInput::default()
        };
        assert_eq!(
            validate(&input, &safety()),
            Err(ValidationError::UnsafeTargetLoss {
                target_loss_kg: 12.0,
                limit_kg: 10.5
            })
        );
    }

    #[test]
    fn test_loss_at_limit_is_accepted() {
        let input = PlanInput {
            weight_kg: 80.0,
            target_loss_kg: 12.0,
            ..PlanInput::default()
        };
        assert!(validate(&input, &safety()).is_ok());
    }

    #[test]
    fn test_limit_rounding_to_tenth() {
        // 0.15 * 73.3 = 10.995
        let input = PlanInput {
            weight_kg: 73.3,
            target_loss_kg: 11.5,
            ..PlanInput::default()
        };
        let Err(ValidationError::UnsafeTargetLoss { limit_kg, .. }) = validate(&input, &safety())
        else {
            panic!("expected UnsafeTargetLoss");
        };
        assert!((limit_kg - 11.0).abs() < 1e-9);
    }
}
