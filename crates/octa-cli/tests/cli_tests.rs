// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `octa` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn octa() -> Command {
    let mut cmd = Command::cargo_bin("octa").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn intersects_flips_with_a_small_gap() {
    octa()
        .args(["intersects", "0", "0", "0", "1", "1", "1", "1.1", "0", "0", "2", "1", "1"])
        .assert()
        .success()
        .stdout("false\n");
    octa()
        .args(["intersects", "0", "0", "0", "1", "1", "1", "0.9", "0", "0", "2", "1", "1"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn translate_accepts_negative_coordinates() {
    // Push for the second box, away from the first.
    octa()
        .args(["translate", "-1", "-1", "0", "1", "1", "1", "0.5", "-1", "0", "2.5", "1", "1"])
        .assert()
        .success()
        .stdout("Vector{ 0.50, 0.00, 0.00 }\n");
    octa()
        .args(["translate", "0.5", "-1", "0", "2.5", "1", "1", "-1", "-1", "0", "1", "1", "1"])
        .assert()
        .success()
        .stdout("Vector{ -0.50, 0.00, 0.00 }\n");
}

#[test]
fn morton_prints_decimal_code() {
    octa()
        .args(["morton", "12.0", "15.1", "1.786"])
        .assert()
        .success()
        .stdout("1073741823\n");
}

#[test]
fn wrong_arity_is_a_usage_error() {
    octa()
        .args(["fit", "0", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("values required"));
}

#[test]
fn scene_lists_pairs_and_bounds() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"boxes": [
            {{"min": [0, 0, 0], "max": [1, 1, 1]}},
            {{"min": [5, 5, 5], "max": [6, 6, 6]}},
            {{"min": [1, 1, 1], "max": [2, 2, 2]}}
        ]}}"#
    )
    .unwrap();

    octa()
        .arg("scene")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pairs: 1\n0 2\nbounds: Aabb{"));
}

#[test]
fn missing_scene_reports_path() {
    octa()
        .args(["scene", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read scene"));
}

#[test]
fn debug_log_level_emits_events_on_stderr() {
    // Disjoint boxes make minimum_translation log at debug.
    octa()
        .args(["--log-level", "debug", "translate"])
        .args(["0", "0", "0", "1", "1", "1", "5", "5", "5", "6", "6", "6"])
        .assert()
        .success()
        .stdout("Vector{ 0.00, 0.00, 0.00 }\n")
        .stderr(predicate::str::contains("do not overlap"));
}
