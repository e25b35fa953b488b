//! Integration tests for the `blinkstick` binary.
//!
//! These tests exercise the CLI via `assert_cmd`. Device-requiring runs
//! rely on the documented behavior that no attached BlinkStick means a
//! silent, successful exit — which is the normal situation on a test host.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("blinkstick")
}

#[test]
fn cli_help_lists_flags() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("--lighttype"))
        .stdout(predicate::str::contains("--duration"))
        .stdout(predicate::str::contains("--times"))
        .stdout(predicate::str::contains("--steps"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── Color resolution ──

#[test]
fn cli_unknown_color_fails_with_message() {
    cli()
        .args(["--color", "notacolor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color \"notacolor\""));
}

#[test]
fn cli_color_lookup_is_case_sensitive() {
    cli()
        .args(["--color", "Red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color \"Red\""));
}

// ── No-device behavior ──
// With no BlinkStick attached, a valid invocation exits 0 with no output.

#[test]
fn cli_no_device_exits_silently() {
    cli()
        .args(["--color", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn cli_defaults_run_without_device() {
    cli().assert().success().stdout(predicate::str::is_empty());
}

// ── Device listing ──

#[test]
fn cli_list_succeeds() {
    cli().arg("--list").assert().success();
}

#[test]
fn cli_list_json_produces_valid_json() {
    let output = cli()
        .args(["--list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("--list --json should produce valid JSON");
    assert!(json.is_array(), "device list should be a JSON array");
}
