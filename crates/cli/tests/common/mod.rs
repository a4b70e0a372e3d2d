//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};

use assert_cmd::cargo;

pub fn zplbc() -> Command {
    Command::new(cargo::cargo_bin!("zplbc"))
}

/// Run `zplbc` with JSON output and return the process output.
pub fn run_json(args: &[&str]) -> Output {
    zplbc()
        .args(["--output", "json"])
        .args(args)
        .output()
        .expect("run zplbc")
}

/// Run `zplbc` with JSON output, assert success, and parse stdout.
pub fn json_ok(args: &[&str]) -> serde_json::Value {
    let output = run_json(args);
    assert!(
        output.status.success(),
        "expected success for {args:?}, stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

/// Write a profile JSON into a temp dir and return (dir, path).
pub fn write_temp_profile(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    fs::write(&path, content).expect("write temp profile");
    (dir, path.to_string_lossy().to_string())
}
