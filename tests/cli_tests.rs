//! Command-line interface smoke tests.
//!
//! The interactive loop needs a real terminal, so these only exercise
//! argument handling paths that exit before raw mode is entered.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_tool() {
    Command::cargo_bin("surfview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "surfaces of two-variable functions",
        ))
        .stdout(predicate::str::contains("--log"))
        .stdout(predicate::str::contains("EXPRESSION"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    Command::cargo_bin("surfview")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_extra_positional_is_rejected() {
    Command::cargo_bin("surfview")
        .unwrap()
        .args(["x+y", "x*y"])
        .assert()
        .failure();
}
