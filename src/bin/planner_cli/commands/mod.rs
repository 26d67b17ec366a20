// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for planner-cli
// ABOUTME: Provides access to plan, batch and activity level commands

pub mod batch;
pub mod levels;
pub mod plan;
