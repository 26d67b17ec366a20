// ABOUTME: Deficit model converting a mass-loss goal into a daily caloric deficit
// ABOUTME: Total deficit from kcal per kg, spread over the target days, subtracted from TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::SafetyConfig;
use serde::{Deserialize, Serialize};

/// Energy budget of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeficitPlan {
    /// Energy to shed over the whole plan (kcal)
    pub total_deficit: f64,
    /// Deficit needed each day (kcal/day)
    pub daily_deficit: f64,
    /// Intake target, `tdee - daily_deficit` (kcal/day)
    pub daily_calorie_target: f64,
}

/// Compute the deficit needed to lose `target_loss_kg` in `target_days`
///
/// `target_days` must be positive; the input validator guarantees it.
#[must_use]
pub fn compute_deficit(
    tdee: f64,
    target_loss_kg: f64,
    target_days: u32,
    safety: &SafetyConfig,
) -> DeficitPlan {
    let total_deficit = target_loss_kg * safety.kcal_per_kg;
    let daily_deficit = total_deficit / f64::from(target_days);

    DeficitPlan {
        total_deficit,
        daily_deficit,
        daily_calorie_target: tdee - daily_deficit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_kg_over_thirty_days() {
        let plan = compute_deficit(2000.0, 3.0, 30, &SafetyConfig::default());
        assert!((plan.total_deficit - 21_600.0).abs() < f64::EPSILON);
        assert!((plan.daily_deficit - 720.0).abs() < f64::EPSILON);
        assert!((plan.daily_calorie_target - 1280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_can_go_negative() {
        let plan = compute_deficit(2000.0, 8.0, 20, &SafetyConfig::default());
        assert!((plan.daily_deficit - 2880.0).abs() < f64::EPSILON);
        assert!(plan.daily_calorie_target < 0.0);
    }

    #[test]
    fn test_longer_plans_need_smaller_deficits() {
        let safety = SafetyConfig::default();
        let mut previous = compute_deficit(2000.0, 5.0, 7, &safety);
        for days in 8..=365 {
            let current = compute_deficit(2000.0, 5.0, days, &safety);
            assert!(current.daily_deficit < previous.daily_deficit);
            assert!(current.daily_calorie_target > previous.daily_calorie_target);
            previous = current;
        }
    }
}
