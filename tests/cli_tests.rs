// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual txcodec binary and verify its behavior.

use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

/// Get the path to the built txcodec binary
fn txcodec_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_txcodec"))
}

/// Get the path to a test fixture file
fn fixture_path(name: &str) -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// Run txcodec with arguments
fn run(args: &[&str]) -> Output {
    let bin = txcodec_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run txcodec with stdin input
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let bin = txcodec_bin();
    let mut child = Command::new(&bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin));
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Run txcodec and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run txcodec and assert failure
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("Transcoder for fee allowances"));
    assert!(output.contains("convert"));
    assert!(output.contains("inspect"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"]);
    assert!(output.contains("txcodec"));
}

#[test]
fn test_cli_invalid_format() {
    let fixture = fixture_path("allowance_amino.json");
    let stderr = run_err(&["convert", "allowance", "--from", "cbor", "--to", "data", &fixture]);
    assert!(stderr.contains("invalid format name"));
}

// ============================================================================
// Convert Tests
// ============================================================================

#[test]
fn test_convert_allowance_amino_to_data() {
    let fixture = fixture_path("allowance_amino.json");
    let output = run_ok(&["convert", "allowance", "--from", "amino", "--to", "data", &fixture]);
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value["@type"], "/cosmos.feegrant.v1beta1.BasicAllowance");
    assert_eq!(value["spend_limit"][0]["amount"], "100");
    assert!(value.get("expiration").is_none());
}

#[test]
fn test_convert_allowance_through_any() {
    let fixture = fixture_path("allowance_data.json");
    let any_hex = run_ok(&["convert", "allowance", "--from", "data", "--to", "any", &fixture]);

    let output = run_with_stdin(
        &["convert", "allowance", "--from", "any", "--to", "data"],
        &any_hex,
    );
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["expiration"], "2030-06-01T12:30:00.500Z");
    assert_eq!(value["spend_limit"][1]["denom"], "uusd");
}

#[test]
fn test_convert_empty_allowance_fails() {
    let fixture = fixture_path("allowance_empty.json");
    let stderr = run_err(&["convert", "allowance", "--from", "data", "--to", "amino", &fixture]);
    assert!(stderr.contains("Invalid allowance"));
}

#[test]
fn test_convert_instantiate_pretty() {
    let fixture = fixture_path("instantiate_data.json");
    let output = run_ok(&[
        "convert",
        "instantiate",
        "--from",
        "data",
        "--to",
        "amino",
        "--pretty",
        &fixture,
    ]);
    assert!(output.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["value"]["code_id"], "42");
}

#[test]
fn test_convert_instantiate_bad_code_id() {
    let fixture = fixture_path("instantiate_bad_code_id.json");
    let stderr = run_err(&["convert", "instantiate", "--from", "data", "--to", "data", &fixture]);
    assert!(stderr.contains("code_id"));
}

#[test]
fn test_convert_instantiate_proto_unsupported() {
    let fixture = fixture_path("instantiate_data.json");
    let stderr = run_err(&["convert", "instantiate", "--from", "data", "--to", "proto", &fixture]);
    assert!(stderr.contains("Unsupported"));
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn test_inspect_allowance() {
    let fixture = fixture_path("allowance_amino.json");
    let output = run_ok(&["inspect", "allowance", "--from", "amino", &fixture]);
    assert!(output.contains("Spend limit: 100uluna"));
    assert!(output.contains("Expiration:  never"));
}

#[test]
fn test_inspect_instantiate_json() {
    let fixture = fixture_path("instantiate_data.json");
    let output = run_ok(&["inspect", "instantiate", "--from", "data", "--json", &fixture]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["code_id"], 42);
    assert_eq!(value["creator_valid"], true);
    assert_eq!(value["init_msg"]["owner"]["name"], "alice");
}
