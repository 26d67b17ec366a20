// ABOUTME: Constants module re-exported from planner-core
// ABOUTME: Energy, Harris-Benedict, activity factor and service name constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_core::constants::*;
