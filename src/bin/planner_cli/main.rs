// ABOUTME: Planner CLI - command-line front end for the weight-loss calorie planner
// ABOUTME: Computes single plans, batches from a JSON file, and lists activity levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a 3 kg loss over 30 days
//! planner-cli plan --weight-kg 70 --height-cm 170 --age 30 --sex male --days 30 --loss-kg 3
//!
//! # Same plan as JSON, moderately active
//! planner-cli --format json plan --weight-kg 70 --height-cm 170 --age 30 --sex male \
//!     --activity moderate --days 30 --loss-kg 3
//!
//! # Evaluate every request in a JSON array
//! planner-cli batch requests.json
//!
//! # Show the activity multipliers
//! planner-cli activity-levels
//! ```

mod commands;
mod helpers;

use calorie_planner::errors::AppResult;
use calorie_planner::logging::{init_from_env, LoggingConfig};
use calorie_planner::models::{ActivityLevel, Sex};
use clap::{Parser, Subcommand};
use helpers::display::{display_error, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "planner-cli",
    about = "Weight-loss calorie planner",
    long_about = "Computes a daily calorie target for a weight-loss goal and proposes a safer timeline when the target falls below the minimum intake."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a single weight-loss plan
    Plan {
        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Sex used to pick the BMR equation (male or female)
        #[arg(long)]
        sex: Sex,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, conflicts_with = "activity_factor")]
        activity: Option<ActivityLevel>,

        /// Raw activity multiplier instead of a named level
        #[arg(long, allow_negative_numbers = true)]
        activity_factor: Option<f64>,

        /// Days to reach the goal
        #[arg(long)]
        days: u32,

        /// Weight to lose in kilograms
        #[arg(long, allow_negative_numbers = true)]
        loss_kg: f64,
    },

    /// Compute every plan request in a JSON file (an array of inputs)
    Batch {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// List activity levels and their multipliers
    ActivityLevels,
}

fn run(command: Command, format: OutputFormat) -> AppResult<()> {
    match command {
        Command::Plan {
            weight_kg,
            height_cm,
            age,
            sex,
            activity,
            activity_factor,
            days,
            loss_kg,
        } => commands::plan::run(
            &commands::plan::PlanArgs {
                weight_kg,
                height_cm,
                age_years: age,
                sex,
                activity,
                activity_factor,
                target_days: days,
                target_loss_kg: loss_kg,
            },
            format,
        ),
        Command::Batch { file } => commands::batch::run(&file, format),
        Command::ActivityLevels => commands::levels::run(format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose().init()
    } else {
        init_from_env()
    };
    if let Err(e) = logging {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("Calorie planner CLI");

    match run(cli.command, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(code = ?error.code, "command failed");
            display_error(&error, cli.format);
            ExitCode::from(u8::try_from(error.code.exit_code()).unwrap_or(1))
        }
    }
}
