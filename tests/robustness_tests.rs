use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_malformed_rows_are_skipped() {
    let seed = NamedTempFile::new().unwrap();
    common::write_rows(
        seed.path(),
        &[
            ["", "User", "user_id", "u-1", ""],
            // Missing identifier
            ["", "User", "user_id", "", ""],
            // Attributes that are not an object
            ["", "User", "user_id", "u-2", "[1, 2]"],
            // Broken JSON
            ["", "User", "user_id", "u-3", "{oops"],
            ["", "User", "user_id", "u-4", ""],
        ],
    )
    .unwrap();

    Command::new(cargo_bin!("reclookup"))
        .args(["User", "u-4", "--seed"])
        .arg(seed.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading record"))
        .stdout(predicate::str::contains(r#""id": "u-4""#));

    Command::new(cargo_bin!("reclookup"))
        .args(["User", "u-2", "--seed"])
        .arg(seed.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_duplicate_rows_fail_with_multiple_matches() {
    let seed = NamedTempFile::new().unwrap();
    common::write_rows(
        seed.path(),
        &[
            ["", "User", "user_id", "dup", r#"{"n": 1}"#],
            ["", "User", "user_id", "dup", r#"{"n": 2}"#],
        ],
    )
    .unwrap();

    Command::new(cargo_bin!("reclookup"))
        .args(["User", "dup", "--seed"])
        .arg(seed.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly one"));
}

#[test]
fn test_blank_identifier_rejected() {
    Command::new(cargo_bin!("reclookup"))
        .args(["User", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid identifier"));
}

#[test]
fn test_missing_seed_file() {
    Command::new(cargo_bin!("reclookup"))
        .args(["User", "u-1", "--seed", "tests/fixtures/does_not_exist.csv"])
        .assert()
        .failure();
}
