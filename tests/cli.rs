//
//  readthedocs-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Binary-level tests for argument handling and exit codes.
//!
//! Everything here runs without network access: either the command never
//! reaches the API layer (usage errors, version, completions) or it fails
//! before a request is built (missing token).

use assert_cmd::Command;
use predicates::prelude::*;

fn rtd() -> Command {
    Command::cargo_bin("rtd").unwrap()
}

#[test]
fn version_subcommand_prints_the_version() {
    rtd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rtd version"));
}

#[test]
fn missing_create_arguments_print_usage_and_fail() {
    rtd()
        .args(["project", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name").and(predicate::str::contains("Usage")));
}

#[test]
fn project_without_subcommand_prints_usage_and_fails() {
    rtd()
        .arg("project")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_token_is_a_clean_error() {
    rtd()
        .env_remove("READTHEDOCS_TOKEN")
        .args(["project", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("READTHEDOCS_TOKEN"));
}

#[test]
fn completion_scripts_are_generated() {
    rtd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rtd"));
}
