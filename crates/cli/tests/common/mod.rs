// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The `genstatus` binary with logging silenced.
pub fn genstatus() -> Command {
    let mut cmd = Command::cargo_bin("genstatus").expect("genstatus binary not built");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A status input line in the JSON input contract.
pub fn input_line(steps: &[&str], index: i64, error: Option<&str>) -> String {
    let mut value = serde_json::json!({
        "title": "Writing your story",
        "steps": steps,
        "currentStepIndex": index,
    });
    if let Some(error) = error {
        value["error"] = serde_json::Value::String(error.to_string());
    }
    value.to_string()
}

/// Write `content` to a file inside a fresh temp directory.
/// The TempDir must be kept alive for as long as the path is used.
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (temp, path)
}
