// ABOUTME: Safety limits and rounding policy for weight-loss plans
// ABOUTME: Minimum intake floor, energy per kilogram, maximum loss fraction, and when to round
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::energy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Limits a plan is checked against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Minimum safe daily intake (kcal/day): 1200
    pub min_daily_intake_kcal: f64,
    /// Energy per kilogram of lost mass (kcal/kg): 7200
    pub kcal_per_kg: f64,
    /// Maximum plan loss as a fraction of body weight: 0.15
    pub max_loss_fraction: f64,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            min_daily_intake_kcal: energy::MIN_DAILY_INTAKE_KCAL,
            kcal_per_kg: energy::KCAL_PER_KG_BODY_MASS,
            max_loss_fraction: energy::MAX_SAFE_LOSS_FRACTION,
        }
    }
}

/// When intermediate energy values are rounded to whole kcal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Full precision through every stage; each reported value is rounded once
    #[default]
    Presentation,
    /// BMR and TDEE are rounded as soon as they are computed and later stages use the rounded TDEE
    Stagewise,
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Presentation => "presentation",
            Self::Stagewise => "stagewise",
        })
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "presentation" => Ok(Self::Presentation),
            "stagewise" => Ok(Self::Stagewise),
            other => Err(format!(
                "Unknown rounding policy '{other}', expected 'presentation' or 'stagewise'"
            )),
        }
    }
}
