// ABOUTME: Shared test utilities and fixtures for calorie planner integration tests
// ABOUTME: Provides quiet logging setup and reference plan inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `calorie_planner`

use calorie_planner::config::PlannerConfig;
use calorie_planner::models::{ActivityLevel, PlanInput, Sex};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default configuration, independent of the process environment
pub fn default_config() -> PlannerConfig {
    PlannerConfig::default()
}

/// 30-year-old man, 170 cm, 70 kg, sedentary, 3 kg over 30 days
pub fn reference_input() -> PlanInput {
    PlanInput {
        weight_kg: 70.0,
        height_cm: 170.0,
        age_years: 30,
        sex: Sex::Male,
        activity_factor: ActivityLevel::Sedentary.factor(),
        target_days: 30,
        target_loss_kg: 3.0,
    }
}

/// Small, elderly, sedentary woman whose TDEE sits below the intake floor
///
/// BMR = 655 + 9.6 * 30 + 1.8 * 100 - 4.7 * 100 = 653, TDEE = 783.6
pub fn low_expenditure_input() -> PlanInput {
    PlanInput {
        weight_kg: 30.0,
        height_cm: 100.0,
        age_years: 100,
        sex: Sex::Female,
        activity_factor: ActivityLevel::Sedentary.factor(),
        target_days: 7,
        target_loss_kg: 4.0,
    }
}
