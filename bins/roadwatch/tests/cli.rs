//! CLI argument and wiring smoke tests.
//!
//! These never touch the network: they exercise argument parsing and the
//! error paths that fire before any request is made.

use assert_cmd::Command;
use predicates::prelude::*;

fn roadwatch() -> Command {
    let mut cmd = Command::cargo_bin("roadwatch").unwrap();
    cmd.env_remove("ROADWATCH_POSITION")
        .env_remove("ROADWATCH_BIN_ID")
        .env_remove("ROADWATCH_MASTER_KEY")
        .env_remove("ROADWATCH_STORE_URL");
    cmd
}

#[test]
fn help_lists_subcommands() {
    roadwatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("remove-nearby"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn report_without_position_fails_with_location_error() {
    roadwatch()
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("location unavailable"));
}

#[test]
fn nearby_without_position_fails_with_location_error() {
    roadwatch()
        .arg("nearby")
        .assert()
        .failure()
        .stderr(predicate::str::contains("location unavailable"));
}

#[test]
fn invalid_position_is_rejected_at_parse_time() {
    roadwatch()
        .args(["report", "--at", "not-a-coordinate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinate"));
}

#[test]
fn out_of_range_position_is_rejected() {
    roadwatch()
        .args(["report", "--at", "91.0,0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn report_without_store_config_points_at_env_vars() {
    roadwatch()
        .args(["report", "--at", "52.52,13.405"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ROADWATCH_BIN_ID"));
}

#[test]
fn position_can_come_from_the_environment() {
    // Store config is still missing, so the run fails later than the
    // location check; the location error must not appear.
    roadwatch()
        .arg("report")
        .env("ROADWATCH_POSITION", "52.52,13.405")
        .assert()
        .failure()
        .stderr(predicate::str::contains("location unavailable").not());
}
