// ABOUTME: Core types and constants for the weight-loss calorie planner
// ABOUTME: Foundation crate with error handling, physiological constants, and the plan data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the calorie
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the plan `ValidationError`
//! - **constants**: Physiological and energy constants organized by domain
//! - **models**: Plan input/output records and the activity-level lookup table

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants and service identifiers organized by domain
pub mod constants;

/// Plan data model (input record, output record, activity levels)
pub mod models;
