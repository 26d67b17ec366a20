// ABOUTME: Closed, ordered activity-level lookup table for TDEE multipliers
// ABOUTME: Pairs each multiplier with a short label and a human-readable description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::activity_factors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity level for TDEE calculation
///
/// The set is closed and order-significant; collaborators use it to build
/// selection controls. The engine only ever sees the numeric factor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Mostly desk work (little or no exercise)
    #[default]
    Sedentary,
    /// Light exercise (1-3 days/week)
    Light,
    /// Moderate exercise (3-5 days/week)
    Moderate,
    /// Hard exercise (6-7 days/week)
    Active,
    /// Physical labor or training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// All levels, ordered from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Default TDEE multiplier for this level
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => activity_factors::SEDENTARY,
            Self::Light => activity_factors::LIGHT,
            Self::Moderate => activity_factors::MODERATE,
            Self::Active => activity_factors::ACTIVE,
            Self::VeryActive => activity_factors::VERY_ACTIVE,
        }
    }

    /// Short machine-friendly label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Description suitable for a selection control
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Mostly desk work (little or no exercise)",
            Self::Light => "Light exercise (1-3 days/week)",
            Self::Moderate => "Moderate exercise (3-5 days/week)",
            Self::Active => "Hard exercise (6-7 days/week)",
            Self::VeryActive => "Very active (physical labor or training twice a day)",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "extra_active" => Ok(Self::VeryActive),
            other => Err(format!(
                "Invalid activity level '{other}'. Must be one of: sedentary, light, moderate, active, very_active"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_factor() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(ActivityLevel::factor).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_parse_labels_and_aliases() {
        assert_eq!("very-active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert_eq!("Lightly_Active".parse::<ActivityLevel>(), Ok(ActivityLevel::Light));
        assert!("couch".parse::<ActivityLevel>().is_err());
    }
}
