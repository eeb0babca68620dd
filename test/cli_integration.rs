//! CLI Integration Tests for Numcore
//!
//! Runs the built `numcore` binary and checks its stdout.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the numcore binary built for this test run
fn numcore_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_numcore"))
}

/// Get a temp directory for test outputs
fn temp_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("numcore_tests");
    path.push(format!("{}_{}", name, std::process::id()));
    fs::create_dir_all(&path).ok();
    path
}

/// Run in an empty directory so no stray numcore.toml is picked up.
fn run(args: &[&str]) -> Output {
    Command::new(numcore_binary())
        .args(args)
        .current_dir(temp_dir("run"))
        .output()
        .expect("Failed to run numcore")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

// ============================================================================
// call
// ============================================================================

#[test]
fn test_call_divmod() {
    let output = run(&["call", "divmod64", "-7", "2"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "-3 -1");
}

#[test]
fn test_call_float_precision() {
    let output = run(&["call", "round", "-3.5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-4.000000");
}

#[test]
fn test_call_json() {
    let output = run(&["--json", "call", "is_power_of_two", "1024"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["function"], "is_power_of_two");
    assert_eq!(value["result"][0], true);
}

#[test]
fn test_call_errors() {
    let output = run(&["call", "no_such_function"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown function"));

    let output = run(&["call", "sqrt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Expected 1 arguments, got 0"));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_category() {
    let output = run(&["list", "--category", "wide"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("multiply64"));
    assert!(text.contains("divmod64"));
    assert!(!text.contains("sqrt"));
}

#[test]
fn test_list_json() {
    let output = run(&["--json", "list"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = value.as_array().unwrap();
    assert!(entries.iter().any(|e| e["name"] == "sqrt" && e["category"] == "arithmetic"));
}

// ============================================================================
// random / verify
// ============================================================================

#[test]
fn test_random_range_seeded() {
    let args = ["random", "range", "--start", "-5", "--end", "5", "-n", "50", "--seed", "3"];
    let first = run(&args);
    assert!(first.status.success());
    let values: Vec<i64> = stdout(&first)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 50);
    assert!(values.iter().all(|v| (-5..5).contains(v)));

    let second = run(&args);
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_random_float() {
    let output = run(&["--json", "random", "float", "-n", "20"]);
    assert!(output.status.success());
    let values: Vec<f64> = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(values.iter().all(|x| (0.0..1.0).contains(x)));
}

#[test]
fn test_verify() {
    let output = run(&["--json", "verify", "--samples", "500", "--seed", "1"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["samples"], 500);
    assert_eq!(value["failures"].as_array().unwrap().len(), 0);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_init_and_load() {
    let dir = temp_dir("config");
    let path = dir.join("numcore.toml");
    fs::remove_file(&path).ok();

    let output = run(&["config", "--init", "--config", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(path.exists());

    // A second init refuses to overwrite
    let output = run(&["config", "--init", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());

    fs::write(&path, "[output]\nprecision = 2\n").unwrap();
    let output = run(&["--config", path.to_str().unwrap(), "call", "pi"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3.14");

    fs::remove_dir_all(&dir).ok();
}
