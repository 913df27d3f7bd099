//! Integration tests for the `worktime` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, reading the schedule from a file or stdin.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the schedule.json fixture.
fn schedule_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.json")
}

/// Helper: path to the buffer.toml settings fixture.
fn buffer_config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/buffer.toml")
}

fn worktime() -> Command {
    let mut cmd = Command::cargo_bin("worktime").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Listing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_from_file() {
    worktime()
        .args(["--schedule", schedule_path(), "free", "2024-10-10"])
        .assert()
        .success()
        .stdout("09:00-11:00\n12:00-13:00\n16:00-18:00\n");
}

#[test]
fn free_from_stdin() {
    let schedule = std::fs::read_to_string(schedule_path()).expect("schedule.json fixture must exist");

    worktime()
        .args(["free", "2024-10-11"])
        .write_stdin(schedule)
        .assert()
        .success()
        .stdout("08:00-09:30\n16:00-17:00\n");
}

#[test]
fn free_as_json() {
    let output = worktime()
        .args(["-s", schedule_path(), "--json", "free", "2024-10-10"])
        .output()
        .expect("free should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!(["09:00-11:00", "12:00-13:00", "16:00-18:00"])
    );
}

#[test]
fn busy_lists_bookings_in_order() {
    worktime()
        .args(["-s", schedule_path(), "busy", "2024-10-10"])
        .assert()
        .success()
        .stdout("11:00-12:00\n13:00-16:00\n");
}

#[test]
fn busy_merged_flag() {
    worktime()
        .args(["-s", schedule_path(), "busy", "--merged", "2024-10-11"])
        .assert()
        .success()
        .stdout("09:30-16:00\n");
}

#[test]
fn days_lists_working_hours() {
    worktime()
        .args(["-s", schedule_path(), "days"])
        .assert()
        .success()
        .stdout("2024-10-10 09:00-18:00\n2024-10-11 08:00-17:00\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_free_and_busy_ranges() {
    worktime()
        .args(["-s", schedule_path(), "check", "2024-10-10", "12:00", "13:00"])
        .assert()
        .success()
        .stdout("available\n");

    worktime()
        .args(["-s", schedule_path(), "check", "2024-10-10", "11:30", "12:30"])
        .assert()
        .success()
        .stdout("unavailable\n");
}

#[test]
fn check_reversed_range_fails() {
    worktime()
        .args(["-s", schedule_path(), "check", "2024-10-10", "13:00", "12:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to check availability"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Slots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_with_buffer() {
    worktime()
        .args([
            "-s",
            schedule_path(),
            "slots",
            "2024-10-10",
            "--duration",
            "60",
            "--buffer",
            "30",
        ])
        .assert()
        .success()
        .stdout("09:00-10:30\n16:30-18:00\n");
}

#[test]
fn slots_first_only() {
    worktime()
        .args(["-s", schedule_path(), "slots", "2024-10-10", "-d", "60", "--first"])
        .assert()
        .success()
        .stdout("09:00-11:00\n");
}

#[test]
fn slots_default_buffer_from_config() {
    worktime()
        .args([
            "-s",
            schedule_path(),
            "--config",
            buffer_config_path(),
            "slots",
            "2024-10-10",
            "-d",
            "60",
        ])
        .assert()
        .success()
        .stdout("09:00-10:30\n16:30-18:00\n");
}

#[test]
fn slots_unknown_date_is_empty_not_error() {
    worktime()
        .args(["-s", schedule_path(), "slots", "2024-10-20", "-d", "30"])
        .assert()
        .success()
        .stdout("");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_date_fails() {
    worktime()
        .args(["-s", schedule_path(), "free", "2024-10-20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not included in the work schedule"));
}

#[test]
fn malformed_date_fails() {
    worktime()
        .args(["-s", schedule_path(), "free", "2024-20-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn invalid_schedule_json_fails() {
    worktime()
        .args(["free", "2024-10-10"])
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule JSON"));
}

#[test]
fn missing_schedule_file_fails() {
    worktime()
        .args(["-s", "/nonexistent/schedule.json", "free", "2024-10-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load schedule"));
}

#[test]
fn missing_config_file_fails() {
    worktime()
        .args([
            "-s",
            schedule_path(),
            "--config",
            "/nonexistent/worktime.toml",
            "days",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
