// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the planner-cli binary
// ABOUTME: Runs plan, batch and activity-levels commands and checks output and exit codes

//! Integration tests for the planner-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::io::Write;
use std::process::Command;

const REFERENCE_PLAN: [&str; 13] = [
    "plan",
    "--weight-kg",
    "70",
    "--height-cm",
    "170",
    "--age",
    "30",
    "--sex",
    "male",
    "--days",
    "30",
    "--loss-kg",
    "3",
];

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_planner-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("plan"));
    assert!(stdout.contains("batch"));
    assert!(stdout.contains("activity-levels"));
}

#[test]
fn test_plan_text_output() {
    let (exit_code, stdout, _stderr) = run_cli(&REFERENCE_PLAN);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("BMR: 1671 kcal/day"));
    assert!(stdout.contains("TDEE: 2005 kcal/day"));
    assert!(stdout.contains("Daily calorie target: 1285 kcal/day"));
    assert!(stdout.contains("21600 kcal over 30 days"));
    assert!(stdout.contains("goal reached in 30 days"));
}

#[test]
fn test_plan_json_output() {
    let mut args = vec!["--format", "json"];
    args.extend_from_slice(&REFERENCE_PLAN);
    let (exit_code, stdout, _stderr) = run_cli(&args);

    assert_eq!(exit_code, 0);
    let response: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["result"]["daily_calorie_target"], 1285);
}

#[test]
fn test_unsafe_plan_shows_safer_timeline() {
    let mut args = REFERENCE_PLAN.to_vec();
    args[10] = "20";
    args[12] = "8";
    let (exit_code, stdout, _stderr) = run_cli(&args);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("below the 1200 kcal/day minimum"));
    assert!(stdout.contains("takes 72 days"));
    assert!(stdout.contains("smaller weight-loss goal for 20 days"));
}

#[test]
fn test_validation_error_exits_non_zero() {
    let mut args = REFERENCE_PLAN.to_vec();
    args[12] = "12";
    let (exit_code, _stdout, stderr) = run_cli(&args);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("10.5 kg"));
}

#[test]
fn test_validation_error_json_envelope() {
    let mut args = vec!["--format", "json"];
    args.extend_from_slice(&REFERENCE_PLAN);
    args[4] = "-70";
    let (exit_code, stdout, _stderr) = run_cli(&args);

    assert_eq!(exit_code, 2);
    let response: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(response["error"]["code"], "INVALID_INPUT");
    assert_eq!(response["error"]["details"]["fields"][0], "weight_kg");
}

#[test]
fn test_activity_level_and_factor_conflict() {
    let mut args = REFERENCE_PLAN.to_vec();
    args.extend_from_slice(&["--activity", "moderate", "--activity-factor", "1.4"]);
    let (exit_code, _stdout, _stderr) = run_cli(&args);

    assert_ne!(exit_code, 0);
}

#[test]
fn test_activity_levels_listing() {
    let (exit_code, stdout, _stderr) = run_cli(&["activity-levels"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("sedentary"));
    assert!(stdout.contains("Mostly desk work"));
    assert!(stdout.contains("1.725"));
}

#[test]
fn test_batch_reports_each_request() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"weight_kg": 70, "height_cm": 170, "age_years": 30, "sex": "male",
              "activity_factor": 1.2, "target_days": 30, "target_loss_kg": 3}},
            {{"weight_kg": 70, "height_cm": 170, "age_years": 0, "sex": "male",
              "activity_factor": 1.2, "target_days": 30, "target_loss_kg": 3}}
        ]"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let (exit_code, stdout, _stderr) = run_cli(&["--format", "json", "batch", path]);

    assert_eq!(exit_code, 0);
    let responses: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(responses[0]["success"], true);
    assert_eq!(responses[0]["result"]["bmr"], 1671);
    assert_eq!(responses[1]["success"], false);
    assert_eq!(responses[1]["error"]["details"]["fields"][0], "age_years");
}

#[test]
fn test_batch_with_malformed_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let path = file.path().to_str().unwrap();

    let (exit_code, _stdout, stderr) = run_cli(&["batch", path]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("not a JSON array"));
}
