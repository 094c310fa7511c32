mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use common::{write_snapshot, weekend_trip};

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("split_core_cli").unwrap();
    cmd.env("SPLIT_CORE_HOME", home.path())
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn settle_prints_greedy_plan() {
    let home = TempDir::new().unwrap();
    let (group, _) = weekend_trip();
    let (_dir, path) = write_snapshot(&group);

    cli(&home)
        .arg("settle")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Chen pays Asha INR 45.00"))
        .stdout(contains("Ben pays Asha INR 15.00"));
}

#[test]
fn summary_lists_totals_and_balances() {
    let home = TempDir::new().unwrap();
    let (group, _) = weekend_trip();
    let (_dir, path) = write_snapshot(&group);

    cli(&home)
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("=== Weekend ==="))
        .stdout(contains("Total spent: INR 120.00"))
        .stdout(contains("+60.00"))
        .stdout(contains("-45.00"));
}

#[test]
fn summary_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let (group, _) = weekend_trip();
    let (_dir, path) = write_snapshot(&group);

    let output = cli(&home)
        .args(["summary", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["balances"].as_array().unwrap().len(), 3);
    assert_eq!(value["settlements"].as_array().unwrap().len(), 2);
    assert_eq!(value["settlements"][0]["from_name"], "Chen");
}

#[test]
fn allocate_equal_puts_remainder_first() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["allocate", "100", "equal", "a", "b", "c"])
        .assert()
        .success()
        .stdout("a: INR 33.34\nb: INR 33.33\nc: INR 33.33\n");
}

#[test]
fn allocate_exact_mismatch_fails() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["allocate", "100", "exact", "a=40", "b=40"])
        .assert()
        .failure()
        .stderr(contains("Split amounts (80.00) do not equal total amount (100.00)"));
}

#[test]
fn configured_currency_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{ "currency": "USD" }"#).unwrap();

    cli(&home)
        .args(["allocate", "10", "percent", "a=60", "b=40"])
        .assert()
        .success()
        .stdout(contains("a: USD 6.00"))
        .stdout(contains("b: USD 4.00"));
}

#[test]
fn oversized_amount_is_an_error_not_a_crash() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["allocate", "79228162514264337593543950335", "equal", "a", "b"])
        .assert()
        .code(1)
        .stderr(contains("out of range"));

    cli(&home)
        .args(["allocate", "1", "exact", "a=92233720368547758.06", "b=92233720368547758.06"])
        .assert()
        .code(1)
        .stderr(contains("exceed the supported range"));
}

#[test]
fn unknown_command_shows_usage() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("bogus")
        .assert()
        .failure()
        .stderr(contains("unknown command `bogus`").and(contains("Usage:")));
}

#[test]
fn missing_snapshot_is_reported() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["settle", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
