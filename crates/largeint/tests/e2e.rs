//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn largeint() -> Command {
    Command::cargo_bin("largeint").expect("binary not found")
}

#[test]
fn help_flag() {
    largeint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("big-integer"));
}

#[test]
fn version_flag() {
    largeint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("largeint"));
}

#[test]
fn sum_and_product_from_args() {
    largeint()
        .args(["999", "1", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum:     1000"))
        .stdout(predicate::str::contains("product: 999"));
}

#[test]
fn known_product_from_args() {
    largeint()
        .args(["123", "456", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("product: 56088"));
}

#[test]
fn values_read_from_stdin() {
    largeint()
        .arg("--quiet")
        .write_stdin("999 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("sum:     1000"));
}

#[test]
fn comparison_verdict_printed() {
    largeint()
        .args(["50", "49"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value1 is greater than value2"));
}

#[test]
fn compound_assignment_lines() {
    largeint()
        .args(["41", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value1 += value2: 42"))
        .stdout(predicate::str::contains("value1 *= value2: 41"));
}

#[test]
fn malformed_value_is_an_error() {
    largeint()
        .args(["12a4", "1", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid digit"));
}

#[test]
fn single_value_is_rejected() {
    largeint()
        .args(["123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected two values"));
}

#[test]
fn completion_flag_emits_script() {
    largeint()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("largeint"));
}

#[test]
fn stats_flag_reports_pool_counters() {
    largeint()
        .args(["999", "1", "--quiet", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pool:"))
        .stdout(predicate::str::contains("misses"));
}
