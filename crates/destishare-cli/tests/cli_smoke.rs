//! CLI surface tests
//!
//! Exercise argument parsing, guidance, and config handling without
//! touching any remote store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn destishare() -> Command {
    let mut cmd = Command::cargo_bin("destishare").unwrap();
    // Keep ambient credentials out of the test environment
    cmd.env_remove("DESTISHARE_URL");
    cmd.env_remove("DESTISHARE_API_KEY");
    cmd
}

#[test]
fn help_lists_every_subcommand() {
    destishare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("vote"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn no_arguments_prints_guidance() {
    destishare()
        .assert()
        .success()
        .stdout(predicate::str::contains("Get started"))
        .stdout(predicate::str::contains("destishare init"));
}

#[test]
fn init_writes_the_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    destishare()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "init",
            "--url",
            "https://example.supabase.co",
            "--api-key",
            "anon-key",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("https://example.supabase.co"));
    assert!(written.contains("anon-key"));
}

#[test]
fn init_requires_both_fields_the_first_time() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    destishare()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "init",
            "--url",
            "https://example.supabase.co",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));

    assert!(!config_path.exists());
}

#[test]
fn list_without_config_points_at_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing.toml");

    destishare()
        .args(["--config", config_path.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("destishare init"));
}

#[test]
fn vote_rejects_unknown_fields() {
    destishare()
        .args(["vote", "7", "upvote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
