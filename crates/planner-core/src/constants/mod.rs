// ABOUTME: Physiological and energy constants for weight-loss planning
// ABOUTME: Harris-Benedict coefficients, activity multipliers, and safe-intake limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains. The engine configuration uses
//! these as defaults; environment overrides never change the constants
//! themselves.

/// Energy balance constants
///
/// References:
/// - Hall, K.D. (2008). What is the required energy deficit per unit weight loss?
///   *International Journal of Obesity*, 32(3), 573-576.
pub mod energy {
    /// Energy content of one kilogram of lost body mass (kcal/kg)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7200.0;

    /// Minimum daily intake considered safe without supervision (kcal/day)
    pub const MIN_DAILY_INTAKE_KCAL: f64 = 1200.0;

    /// Maximum plan loss as a fraction of current body weight
    pub const MAX_SAFE_LOSS_FRACTION: f64 = 0.15;
}

/// Harris-Benedict BMR coefficients
///
/// Reference: Harris, J.A. & Benedict, F.G. (1918). A Biometric Study of
/// Human Basal Metabolism. *PNAS*, 4(12), 370-373.
pub mod harris_benedict {
    /// Male intercept (kcal/day)
    pub const MALE_CONSTANT: f64 = 66.0;
    /// Male weight coefficient (kcal/kg)
    pub const MALE_WEIGHT_COEF: f64 = 13.7;
    /// Male height coefficient (kcal/cm)
    pub const MALE_HEIGHT_COEF: f64 = 5.0;
    /// Male age coefficient (kcal/year, subtracted)
    pub const MALE_AGE_COEF: f64 = 6.8;

    /// Female intercept (kcal/day)
    pub const FEMALE_CONSTANT: f64 = 655.0;
    /// Female weight coefficient (kcal/kg)
    pub const FEMALE_WEIGHT_COEF: f64 = 9.6;
    /// Female height coefficient (kcal/cm)
    pub const FEMALE_HEIGHT_COEF: f64 = 1.8;
    /// Female age coefficient (kcal/year, subtracted)
    pub const FEMALE_AGE_COEF: f64 = 4.7;
}

/// TDEE activity multipliers
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod activity_factors {
    /// Mostly desk work, little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Physical labor or training twice a day
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported by the planner binaries
    pub const CALORIE_PLANNER: &str = "calorie-planner";
}
