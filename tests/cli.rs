use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn demo_runs_to_completion() {
    Command::cargo_bin("workpool-demo")
        .unwrap()
        .args(&["--workers", "4", "--jobs", "20", "--job-millis", "1", "--drain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pool shut down"));
}

#[test]
fn demo_rejects_zero_workers() {
    Command::cargo_bin("workpool-demo")
        .unwrap()
        .args(&["--workers", "0", "--jobs", "1"])
        .assert()
        .failure();
}
