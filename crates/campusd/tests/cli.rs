//! Integration tests for the campusd CLI commands.
//!
//! Local-state-only functionality tests running in serial to avoid state
//! store conflicts; commands that need the catalog API are exercised in the
//! library's test suite instead.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::tempdir;

// Helper function to create a clean command instance
fn campus() -> Command { Command::cargo_bin("campus").unwrap() }

// Helper to get a temporary state store path
fn temp_db() -> (tempfile::TempDir, PathBuf) {
  let dir = tempdir().unwrap();
  let db_path = dir.path().join("test.db");
  (dir, db_path)
}

#[test]
#[serial]
fn test_help_lists_commands() {
  campus()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("watch"))
    .stdout(predicate::str::contains("certificate"));
}

#[test]
#[serial]
fn test_completed_starts_empty() {
  let (dir, db_path) = temp_db();

  campus()
    .arg("completed")
    .arg("--path")
    .arg(&db_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("No completed courses yet"));

  assert!(db_path.exists());
  dir.close().unwrap();
}

#[test]
#[serial]
fn test_favorites_start_empty() {
  let (dir, db_path) = temp_db();

  campus()
    .arg("favorites")
    .arg("--path")
    .arg(&db_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("No favorite lessons yet"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_certificate_is_gated_before_completion() {
  let (dir, db_path) = temp_db();

  campus()
    .arg("certificate")
    .arg("rust-101")
    .arg("--path")
    .arg(&db_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("not completed yet"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_signed_out_subscription_status() {
  let (dir, db_path) = temp_db();

  campus()
    .arg("subscription")
    .arg("--path")
    .arg(&db_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("No subscription"))
    .stdout(predicate::str::contains("Subscribe to unlock"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_clean_accepts_defaults() {
  let (dir, db_path) = temp_db();

  // Touch the store first so there is something to clean.
  campus().arg("completed").arg("--path").arg(&db_path).assert().success();

  campus()
    .arg("clean")
    .arg("--path")
    .arg(&db_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("Local state cleaned"));

  dir.close().unwrap();
}
