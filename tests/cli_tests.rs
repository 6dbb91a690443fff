//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;

/// Build a command with an isolated HOME so tests never touch a real
/// configuration file, and without VRA_* environment overrides.
fn vractl(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("vractl").unwrap();
    cmd.env("HOME", home)
        .env_remove("VRA_SERVER")
        .env_remove("VRA_USERNAME")
        .env_remove("VRA_PASSWORD")
        .env_remove("VRA_APITOKEN")
        .env_remove("VRA_ACCESSTOKEN");
    cmd
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore and manage VMware Aria Automation"));
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vractl"));
}

#[test]
fn test_version_subcommand() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vractl"));
}

#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .args(["get", "project", "--out", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completion_bash() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vractl"));
}

#[test]
fn test_get_without_target_fails_with_hint() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .args(["get", "project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("VRA_SERVER"));
}

#[test]
fn test_config_target_lifecycle() {
    let home = tempfile::tempdir().unwrap();

    // set-target writes the profile
    vractl(home.path())
        .args([
            "config",
            "set-target",
            "prod",
            "--server",
            "vra.corp.local",
            "--username",
            "admin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved target 'prod'"));

    // get-target shows it
    vractl(home.path())
        .args(["config", "get-target"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vra.corp.local"));

    // use-target marks it current
    vractl(home.path())
        .args(["config", "use-target", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now using target 'prod'"));

    // delete-target with --confirm removes it without prompting
    vractl(home.path())
        .args(["--confirm", "config", "delete-target", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted target 'prod'"));

    // and it is gone
    vractl(home.path())
        .args(["config", "get-target", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No target 'prod'"));
}

#[test]
fn test_config_get_target_json_redacts_secrets() {
    let home = tempfile::tempdir().unwrap();

    vractl(home.path())
        .args([
            "config",
            "set-target",
            "prod",
            "--server",
            "vra.corp.local",
            "--password",
            "super-secret",
        ])
        .assert()
        .success();

    vractl(home.path())
        .args(["config", "get-target", "--out", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password_set"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn test_set_target_without_server_fails() {
    let home = tempfile::tempdir().unwrap();
    vractl(home.path())
        .args(["config", "set-target", "prod", "--username", "admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--server"));
}
