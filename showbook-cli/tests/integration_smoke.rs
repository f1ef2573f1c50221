//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// `showbook` run from an empty directory with an empty home, so no `.env`
/// file can supply a database URL.
fn showbook(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("showbook").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    showbook(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let dir = tempfile::tempdir().unwrap();
    showbook(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--no-migrate"))
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_migrate_help() {
    let dir = tempfile::tempdir().unwrap();
    showbook(&dir)
        .arg("migrate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    showbook(&dir)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let dir = tempfile::tempdir().unwrap();
    showbook(&dir)
        .arg("serve")
        .arg("--bind")
        .arg("not-an-address")
        .assert()
        .failure();
}
