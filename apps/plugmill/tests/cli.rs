//! Binary-level checks for the plugmill CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("plugmill")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugins"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("plugmill")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugmill"));
}

#[test]
fn rejects_unexpected_arguments() {
    Command::cargo_bin("plugmill")
        .unwrap()
        .arg("install")
        .assert()
        .failure();
}

#[test]
fn fails_outside_a_host_project() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("plugmill")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cargo.toml"));
}
