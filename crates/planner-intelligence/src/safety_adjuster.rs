// ABOUTME: Safety and feasibility adjustment for weight-loss plans
// ABOUTME: Checks the intake target against the floor and recomputes a safe timeline when needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety & Feasibility Adjuster
//!
//! Never fails. An unsafe plan is still a valid result: it comes back with
//! `is_safe = false` and either a longer timeline at the floor intake or an
//! explicit [`Feasibility::Infeasible`] marker when expenditure does not exceed
//! the floor at all.

use crate::config::intelligence::SafetyConfig;
use planner_core::models::Feasibility;
use serde::{Deserialize, Serialize};

/// Outcome of the safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    /// Whether the intake target meets the floor
    pub is_safe: bool,
    /// Safe timeline for the same total deficit
    pub feasibility: Feasibility,
}

/// Days needed to shed `total_deficit` when eating exactly the floor intake
///
/// Returns `None` when `tdee` does not exceed the floor, since no daily
/// deficit is available without going below it, or when the day count is not
/// finite. Finite counts saturate at `u32::MAX`.
#[must_use]
pub fn days_at_floor(tdee: f64, total_deficit: f64, safety: &SafetyConfig) -> Option<u32> {
    let max_daily_deficit = tdee - safety.min_daily_intake_kcal;
    if max_daily_deficit.is_nan() || max_daily_deficit <= 0.0 {
        return None;
    }
    let days = total_deficit / max_daily_deficit;
    days.is_finite().then(|| days.ceil() as u32)
}

/// Check a plan against the minimum-intake floor
#[must_use]
pub fn assess_safety(
    tdee: f64,
    daily_calorie_target: f64,
    total_deficit: f64,
    target_days: u32,
    safety: &SafetyConfig,
) -> SafetyAssessment {
    if daily_calorie_target >= safety.min_daily_intake_kcal {
        return SafetyAssessment {
            is_safe: true,
            feasibility: Feasibility::OnSchedule { days: target_days },
        };
    }

    let feasibility = days_at_floor(tdee, total_deficit, safety).map_or(
        Feasibility::Infeasible {
            floor_kcal: safety.min_daily_intake_kcal.round() as i64,
        },
        |days| Feasibility::Extended { days },
    );

    SafetyAssessment {
        is_safe: false,
        feasibility,
    }
}
