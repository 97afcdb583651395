// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for `genstatus render`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{genstatus, input_line, write_temp};
use predicates::prelude::*;

const STEPS: [&str; 6] = [
    "--step", "Draft", "--step", "Refine", "--step", "Done!",
];

#[test]
fn test_help() {
    genstatus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multi-step generation task"));
}

#[test]
fn test_version() {
    genstatus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("genstatus"));
}

#[test]
fn test_first_step_in_progress() {
    let output = genstatus()
        .args(["render", "--title", "Writing your story"])
        .args(STEPS)
        .args(["--index", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    similar_asserts::assert_eq!(
        text.as_str(),
        "Writing your story\n\
         [██████████░░░░░░░░░░░░░░░░░░░░] 33%\n  \
         ◌ Draft\n  \
         │\n  \
         · Refine\n"
    );
}

#[test]
fn test_second_step_marks_first_completed() {
    genstatus()
        .arg("render")
        .args(STEPS)
        .args(["--index", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Draft"))
        .stdout(predicate::str::contains("◌ Refine"))
        .stdout(predicate::str::contains("67%"));
}

#[test]
fn test_last_step_is_success() {
    genstatus()
        .arg("render")
        .args(STEPS)
        .args(["--index", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creation complete!"));
}

#[test]
fn test_error_is_rendered_and_exits_zero() {
    genstatus()
        .arg("render")
        .args(STEPS)
        .args(["--index", "1", "--error", "network timeout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generation failed"))
        .stdout(predicate::str::contains("network timeout"));
}

#[test]
fn test_empty_steps_fail() {
    genstatus()
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("step list is empty"));
}

#[test]
fn test_out_of_range_index_fails() {
    genstatus()
        .arg("render")
        .args(STEPS)
        .args(["--index", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "current step index 3 is out of range for 3 steps",
        ));
}

#[test]
fn test_negative_index_fails() {
    genstatus()
        .arg("render")
        .args(STEPS)
        .args(["--index", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_json_output() {
    let output = genstatus()
        .arg("render")
        .args(STEPS)
        .args(["--index", "1", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["title"], "Generating");
    assert_eq!(json["state"]["kind"], "inProgress");
    assert_eq!(json["state"]["rows"][0]["status"], "completed");
    assert_eq!(json["state"]["rows"][1]["status"], "current");
}

#[test]
fn test_input_file() {
    let (_temp, path) = write_temp("input.json", &input_line(&["Only"], 0, None));

    genstatus()
        .args(["render", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Creation complete!"));
}

#[test]
fn test_input_from_stdin() {
    genstatus()
        .args(["render", "--input", "-"])
        .write_stdin(input_line(&["Draft", "Done!"], 0, Some("quota exceeded")))
        .assert()
        .success()
        .stdout(predicate::str::contains("quota exceeded"));
}

#[test]
fn test_input_conflicts_with_steps() {
    genstatus()
        .args(["render", "--input", "-", "--step", "Draft"])
        .assert()
        .failure();
}

#[test]
fn test_input_conflicts_with_title() {
    let (_temp, path) = write_temp("input.json", &input_line(&["Only"], 0, None));

    genstatus()
        .args(["render", "--title", "Ignored", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_malformed_input_file_is_reported() {
    let (_temp, path) = write_temp("input.json", "{\"title\": \"Story\"");

    genstatus()
        .args(["render", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed status input in"))
        .stderr(predicate::str::contains("title, steps and currentStepIndex"))
        .stderr(predicate::str::contains("cannot read").not());
}

#[test]
fn test_huge_bar_width_is_rejected() {
    let (_temp, path) = write_temp("theme.toml", "bar_width = 9223372036854775807\n");

    genstatus()
        .arg("--config")
        .arg(&path)
        .arg("render")
        .args(STEPS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bar_width must be between 1 and 200"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_custom_config() {
    let (_temp, path) = write_temp(
        "theme.toml",
        r#"
[copy]
success_heading = "All done"
success_detail = "Enjoy."
"#,
    );

    genstatus()
        .arg("--config")
        .arg(&path)
        .arg("render")
        .args(STEPS)
        .args(["--index", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All done"))
        .stdout(predicate::str::contains("Enjoy."));
}

#[test]
fn test_invalid_config_fails() {
    let (_temp, path) = write_temp("theme.toml", "bar_width = 0\n");

    genstatus()
        .arg("--config")
        .arg(&path)
        .arg("render")
        .args(STEPS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bar_width"));
}
