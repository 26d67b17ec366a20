// ABOUTME: Validation error types for weight-loss plan inputs
// ABOUTME: Non-positive inputs and unsafe target losses, convertible into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Validation Errors
//!
//! The engine rejects a plan request for exactly two reasons, both detected
//! before any energy computation runs. Each variant carries enough data for a
//! collaborator to render a precise message.

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric fields of a plan input that must be strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Body weight in kilograms
    WeightKg,
    /// Height in centimeters
    HeightCm,
    /// Age in years
    AgeYears,
    /// Activity multiplier
    ActivityFactor,
    /// Requested plan duration in days
    TargetDays,
    /// Requested weight loss in kilograms
    TargetLossKg,
}

impl InputField {
    /// Parameter name as used in requests and responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightKg => "weight_kg",
            Self::HeightCm => "height_cm",
            Self::AgeYears => "age_years",
            Self::ActivityFactor => "activity_factor",
            Self::TargetDays => "target_days",
            Self::TargetLossKg => "target_loss_kg",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a plan request is rejected before computation
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// One or more numeric inputs are zero, negative, or not finite
    #[error("all values must be positive (offending: {})", join_fields(.fields))]
    NonPositiveInput {
        /// Offending fields, in input order
        fields: Vec<InputField>,
    },

    /// Requested loss exceeds the safe fraction of body weight
    #[error(
        "safe weight loss is limited to {limit_kg:.1} kg for this body weight (requested {target_loss_kg} kg)"
    )]
    UnsafeTargetLoss {
        /// Requested loss in kilograms
        target_loss_kg: f64,
        /// Maximum safe loss, rounded to one decimal
        limit_kg: f64,
    },
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(InputField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Error code used when surfacing this error through [`AppError`]
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NonPositiveInput { .. } => ErrorCode::InvalidInput,
            Self::UnsafeTargetLoss { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let details = serde_json::to_value(&error).unwrap_or(serde_json::Value::Null);
        Self::new(error.code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_message_lists_fields() {
        let error = ValidationError::NonPositiveInput {
            fields: vec![InputField::AgeYears, InputField::TargetDays],
        };
        assert_eq!(
            error.to_string(),
            "all values must be positive (offending: age_years, target_days)"
        );
    }

    #[test]
    fn test_unsafe_target_loss_converts_to_out_of_range() {
        let error = ValidationError::UnsafeTargetLoss {
            target_loss_kg: 12.0,
            limit_kg: 10.5,
        };
        let app_error = AppError::from(error);

        assert_eq!(app_error.code, ErrorCode::ValueOutOfRange);
        assert!(app_error.message.contains("10.5 kg"));
        assert_eq!(app_error.details["kind"], "unsafe_target_loss");
        assert_eq!(app_error.details["limit_kg"], 10.5);
    }
}
