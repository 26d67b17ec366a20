// ABOUTME: Energy model configuration: Harris-Benedict coefficients and activity factors
// ABOUTME: Defaults come from planner-core constants and may be overridden from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model Configuration
//!
//! # Scientific References
//!
//! - BMR: Harris & Benedict (1918), PNAS 4(12), 370-373
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use planner_core::constants::{activity_factors, harris_benedict};
use planner_core::models::{ActivityLevel, Sex};
use serde::{Deserialize, Serialize};

/// Per-sex coefficients of the Harris-Benedict equation
///
/// `bmr = constant + weight_coef * kg + height_coef * cm - age_coef * years`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrCoefficients {
    /// Intercept (kcal/day)
    pub constant: f64,
    /// Weight coefficient (kcal/kg)
    pub weight_coef: f64,
    /// Height coefficient (kcal/cm)
    pub height_coef: f64,
    /// Age coefficient (kcal/year), subtracted
    pub age_coef: f64,
}

/// Harris-Benedict BMR configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarrisBenedictConfig {
    /// Male variant
    pub male: BmrCoefficients,
    /// Female variant
    pub female: BmrCoefficients,
}

impl HarrisBenedictConfig {
    /// Coefficients for the given sex
    #[must_use]
    pub const fn coefficients(&self, sex: Sex) -> &BmrCoefficients {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }
}

impl Default for HarrisBenedictConfig {
    fn default() -> Self {
        Self {
            male: BmrCoefficients {
                constant: harris_benedict::MALE_CONSTANT,
                weight_coef: harris_benedict::MALE_WEIGHT_COEF,
                height_coef: harris_benedict::MALE_HEIGHT_COEF,
                age_coef: harris_benedict::MALE_AGE_COEF,
            },
            female: BmrCoefficients {
                constant: harris_benedict::FEMALE_CONSTANT,
                weight_coef: harris_benedict::FEMALE_WEIGHT_COEF,
                height_coef: harris_benedict::FEMALE_HEIGHT_COEF,
                age_coef: harris_benedict::FEMALE_AGE_COEF,
            },
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light exercise: 1.375
    pub light: f64,
    /// Moderate exercise: 1.55
    pub moderate: f64,
    /// Hard exercise: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Configured multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Factors in table order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ]
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
        }
    }
}
