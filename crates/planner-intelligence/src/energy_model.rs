// ABOUTME: Energy model: basal metabolic rate and total daily energy expenditure
// ABOUTME: Harris-Benedict BMR by sex, scaled by the activity multiplier into TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! # Scientific References
//!
//! - Harris, J.A. & Benedict, F.G. (1918). A Biometric Study of Human Basal
//!   Metabolism. *PNAS*, 4(12), 370-373.
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use crate::config::intelligence::{HarrisBenedictConfig, PlannerConfig, RoundingPolicy};
use planner_core::models::Sex;
use serde::{Deserialize, Serialize};

/// BMR and TDEE for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
}

/// Calculate Basal Metabolic Rate using the Harris-Benedict equation
///
/// Formula:
/// - Men: BMR = 66 + (13.7 x `weight_kg`) + (5 x `height_cm`) - (6.8 x age)
/// - Women: BMR = 655 + (9.6 x `weight_kg`) + (1.8 x `height_cm`) - (4.7 x age)
///
/// No plausibility clamp is applied: extreme inputs may produce a negative value.
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &HarrisBenedictConfig,
) -> f64 {
    let coef = config.coefficients(sex);

    let body = coef
        .weight_coef
        .mul_add(weight_kg, coef.height_coef.mul_add(height_cm, coef.constant));
    coef.age_coef.mul_add(-f64::from(age_years), body)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Compute BMR and TDEE, applying the configured rounding policy
///
/// Under [`RoundingPolicy::Stagewise`] the BMR is rounded before it is scaled
/// and the TDEE is rounded as well; otherwise both keep full precision.
#[must_use]
pub fn compute_energy(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_factor: f64,
    config: &PlannerConfig,
) -> EnergyEstimate {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, sex, &config.bmr);

    match config.rounding {
        RoundingPolicy::Presentation => EnergyEstimate {
            bmr,
            tdee: calculate_tdee(bmr, activity_factor),
        },
        RoundingPolicy::Stagewise => {
            let bmr = bmr.round();
            EnergyEstimate {
                bmr,
                tdee: calculate_tdee(bmr, activity_factor).round(),
            }
        }
    }
}
