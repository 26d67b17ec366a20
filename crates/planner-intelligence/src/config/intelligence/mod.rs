// ABOUTME: Engine configuration for the weight-loss calculation pipeline
// ABOUTME: Orchestrates domain configs and provides unified validation, env overrides, and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Type-safe configuration for the calculation engine. Defaults reproduce the
//! published formulas and limits; environment variables may override them for
//! experimentation, and every loaded configuration is validated before use.
//!
//! # Module Structure
//!
//! - `energy` - Harris-Benedict coefficients and activity factors
//! - `safety` - Minimum intake, energy per kilogram, loss fraction, rounding policy
//! - `error` - Configuration errors

pub mod energy;
pub mod error;
pub mod safety;

pub use energy::{ActivityFactorsConfig, BmrCoefficients, HarrisBenedictConfig};
pub use error::ConfigError;
pub use safety::{RoundingPolicy, SafetyConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Environment variable names recognised by [`PlannerConfig::load`]
pub mod env_vars {
    /// Minimum safe daily intake (kcal/day)
    pub const MIN_DAILY_INTAKE_KCAL: &str = "PLANNER_MIN_DAILY_INTAKE_KCAL";
    /// Energy per kilogram of lost mass (kcal/kg)
    pub const KCAL_PER_KG: &str = "PLANNER_KCAL_PER_KG";
    /// Maximum loss as a fraction of body weight
    pub const MAX_LOSS_FRACTION: &str = "PLANNER_MAX_LOSS_FRACTION";
    /// Rounding policy (`presentation` or `stagewise`)
    pub const ROUNDING_POLICY: &str = "PLANNER_ROUNDING_POLICY";
    /// Sedentary activity factor
    pub const ACTIVITY_SEDENTARY: &str = "PLANNER_ACTIVITY_SEDENTARY";
    /// Light activity factor
    pub const ACTIVITY_LIGHT: &str = "PLANNER_ACTIVITY_LIGHT";
    /// Moderate activity factor
    pub const ACTIVITY_MODERATE: &str = "PLANNER_ACTIVITY_MODERATE";
    /// Active activity factor
    pub const ACTIVITY_ACTIVE: &str = "PLANNER_ACTIVITY_ACTIVE";
    /// Very active activity factor
    pub const ACTIVITY_VERY_ACTIVE: &str = "PLANNER_ACTIVITY_VERY_ACTIVE";
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// BMR formula coefficients
    pub bmr: HarrisBenedictConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Safety limits
    pub safety: SafetyConfig,
    /// When intermediate values are rounded
    pub rounding: RoundingPolicy,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            min_daily_intake_kcal = config.safety.min_daily_intake_kcal,
            kcal_per_kg = config.safety.kcal_per_kg,
            max_loss_fraction = config.safety.max_loss_fraction,
            rounding = %config.rounding,
            "planner configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is not positive, the loss fraction is outside
    /// `(0, 1]`, or activity factors are not positive and strictly ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        let safety = &self.safety;
        if !(safety.min_daily_intake_kcal.is_finite() && safety.min_daily_intake_kcal > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "min_daily_intake_kcal must be positive",
            ));
        }
        if !(safety.kcal_per_kg.is_finite() && safety.kcal_per_kg > 0.0) {
            return Err(ConfigError::ValueOutOfRange("kcal_per_kg must be positive"));
        }
        if !(safety.max_loss_fraction > 0.0 && safety.max_loss_fraction <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "max_loss_fraction must be in (0, 1]",
            ));
        }

        let factors = self.activity_factors.as_array();
        if factors.iter().any(|f| !(f.is_finite() && *f > 0.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be positive",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Safety limits
        Self::apply_env_var(
            env_vars::MIN_DAILY_INTAKE_KCAL,
            &mut self.safety.min_daily_intake_kcal,
        )?;
        Self::apply_env_var(env_vars::KCAL_PER_KG, &mut self.safety.kcal_per_kg)?;
        Self::apply_env_var(
            env_vars::MAX_LOSS_FRACTION,
            &mut self.safety.max_loss_fraction,
        )?;
        Self::apply_env_var(env_vars::ROUNDING_POLICY, &mut self.rounding)?;

        // Activity factors
        Self::apply_env_var(
            env_vars::ACTIVITY_SEDENTARY,
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(env_vars::ACTIVITY_LIGHT, &mut self.activity_factors.light)?;
        Self::apply_env_var(
            env_vars::ACTIVITY_MODERATE,
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var(env_vars::ACTIVITY_ACTIVE, &mut self.activity_factors.active)?;
        Self::apply_env_var(
            env_vars::ACTIVITY_VERY_ACTIVE,
            &mut self.activity_factors.very_active,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            env_vars::MIN_DAILY_INTAKE_KCAL,
            env_vars::KCAL_PER_KG,
            env_vars::MAX_LOSS_FRACTION,
            env_vars::ROUNDING_POLICY,
            env_vars::ACTIVITY_SEDENTARY,
            env_vars::ACTIVITY_LIGHT,
            env_vars::ACTIVITY_MODERATE,
            env_vars::ACTIVITY_ACTIVE,
            env_vars::ACTIVITY_VERY_ACTIVE,
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.safety.min_daily_intake_kcal - 1200.0).abs() < f64::EPSILON);
        assert!((config.safety.kcal_per_kg - 7200.0).abs() < f64::EPSILON);
        assert!((config.safety.max_loss_fraction - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.rounding, RoundingPolicy::Presentation);
    }

    #[test]
    #[serial]
    fn test_env_overrides_are_applied() {
        clear_env();
        env::set_var(env_vars::MIN_DAILY_INTAKE_KCAL, "1500");
        env::set_var(env_vars::ROUNDING_POLICY, "stagewise");

        let config = PlannerConfig::load().unwrap();
        clear_env();

        assert!((config.safety.min_daily_intake_kcal - 1500.0).abs() < f64::EPSILON);
        assert_eq!(config.rounding, RoundingPolicy::Stagewise);
    }

    #[test]
    #[serial]
    fn test_unparseable_override_is_rejected() {
        clear_env();
        env::set_var(env_vars::KCAL_PER_KG, "lots");

        let result = PlannerConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn test_descending_activity_factors_are_rejected() {
        clear_env();
        env::set_var(env_vars::ACTIVITY_LIGHT, "1.1");

        let result = PlannerConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_loss_fraction_must_be_a_fraction() {
        let mut config = PlannerConfig::default();
        config.safety.max_loss_fraction = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
