//! Tests for `grotto init` command.

use std::fs;

use crate::support::*;

#[test]
fn test_init_creates_config_and_baseline() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    let config_path = t.home.path().join(".config/grotto/config.toml");
    assert!(config_path.exists(), "config.toml should exist");

    let config_content = fs::read_to_string(config_path).unwrap();
    assert!(config_content.contains("version"));
    assert!(config_content.contains("recipient"));

    assert_eq!(t.branch_names(), vec!["grotto"]);
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_with_wrong_passphrase_exhausts_attempts() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("init")
        .arg(t.store.path())
        .arg("--key")
        .arg(&t.key)
        .write_stdin(format!(
            "{0}\n{0}\n{0}\n",
            crate::support::fixtures::WRONG_PASSPHRASE
        ))
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "attempts");

    // Nothing was persisted.
    assert!(!t.home.path().join(".config/grotto/config.toml").exists());
}

#[test]
fn test_init_rejects_non_repository() {
    let t = Test::new();
    let plain_dir = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .arg("init")
        .arg(plain_dir.path())
        .arg("--key")
        .arg(&t.key)
        .write_stdin(format!("{}\n", TEST_PASSPHRASE))
        .output()
        .unwrap();

    assert_failure(&output);
}

#[test]
fn test_init_rejects_garbage_key_file() {
    let t = Test::new();
    let bad_key = t.home.path().join("bad.age");
    fs::write(&bad_key, "not an armored key").unwrap();

    let output = t
        .cmd()
        .arg("init")
        .arg(t.store.path())
        .arg("--key")
        .arg(&bad_key)
        .write_stdin(format!("{}\n", TEST_PASSPHRASE))
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "armored");
}

#[test]
fn test_init_reconnects_to_existing_baseline() {
    // First home initializes the store; a second home connects to the
    // same repository without re-seeding it.
    let t = Test::init();
    assert_success(&t.insert("shared", "v"));

    let other_home = tempfile::TempDir::new().unwrap();
    let output = t
        .cmd()
        .env("HOME", other_home.path())
        .env("XDG_CONFIG_HOME", other_home.path().join(".config"))
        .arg("init")
        .arg(t.store.path())
        .arg("--key")
        .arg(&t.key)
        .write_stdin(format!("{}\n", TEST_PASSPHRASE))
        .output()
        .unwrap();

    assert_success(&output);
    // The existing secret branch survived the reconnect.
    assert!(t.branch_names().contains(&"shared.age".to_string()));
}
