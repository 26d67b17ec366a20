// ABOUTME: Weight-loss plan input and output records
// ABOUTME: Immutable PlanInput, the WeightLossPlan result, and the Feasibility outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, selecting the BMR formula variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male formula variant
    Male,
    /// Female formula variant
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err("Sex must be 'male' or 'female'".to_owned()),
        }
    }
}

/// A single plan request
///
/// Built once per calculation by the caller and never mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Sex for the BMR formula
    pub sex: Sex,
    /// TDEE multiplier, normally one of the [`ActivityLevel`](super::ActivityLevel) factors
    pub activity_factor: f64,
    /// Requested plan duration in days
    pub target_days: u32,
    /// Requested weight loss in kilograms
    pub target_loss_kg: f64,
}

impl Default for PlanInput {
    /// Form defaults: 30-year-old male, 170 cm, 70 kg, sedentary, 3 kg in 30 days
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex: Sex::Male,
            activity_factor: super::ActivityLevel::Sedentary.factor(),
            target_days: 30,
            target_loss_kg: 3.0,
        }
    }
}

/// How the requested timeline relates to the minimum safe intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Feasibility {
    /// The requested plan is safe; the timeline is unchanged
    OnSchedule {
        /// Requested duration in days
        days: u32,
    },
    /// The requested plan is unsafe; this many days reach the same goal at the floor intake
    Extended {
        /// Days needed when eating exactly the floor intake
        days: u32,
    },
    /// Expenditure does not exceed the floor, so no timeline reaches the goal safely
    Infeasible {
        /// Minimum safe intake the plan was checked against (kcal/day)
        floor_kcal: i64,
    },
}

impl Feasibility {
    /// Day count of the feasible timeline, `None` when no safe plan exists
    #[must_use]
    pub const fn days(&self) -> Option<u32> {
        match self {
            Self::OnSchedule { days } | Self::Extended { days } => Some(*days),
            Self::Infeasible { .. } => None,
        }
    }
}

/// Result of a successful plan calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLossPlan {
    /// Basal metabolic rate (kcal/day)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: i64,
    /// Energy to shed over the whole plan (kcal)
    pub total_deficit_kcal: i64,
    /// Daily deficit needed to finish on time (kcal/day)
    pub daily_deficit: i64,
    /// Daily intake target, `tdee - daily_deficit`; negative for pathological requests
    pub daily_calorie_target: i64,
    /// Whether the daily target meets the minimum safe intake
    pub is_safe: bool,
    /// Safe timeline for the same goal
    pub feasibility: Feasibility,
    /// Echoed body weight (kg)
    pub weight_kg: f64,
    /// Echoed target loss (kg)
    pub target_loss_kg: f64,
    /// Echoed requested duration (days)
    pub target_days: u32,
}

impl WeightLossPlan {
    /// Days needed to reach the goal without dropping below the floor intake
    ///
    /// Equals `target_days` for safe plans and `None` when no safe plan exists.
    #[must_use]
    pub const fn feasible_days(&self) -> Option<u32> {
        self.feasibility.days()
    }
}
