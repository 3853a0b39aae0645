//! Tests for error handling and CLI flags.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::support::*;

/// A grotto command in a home where init never ran.
fn uninitialized() -> (tempfile::TempDir, Command) {
    let home = tempfile::TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("grotto").unwrap();
    cmd.env("HOME", home.path());
    cmd.env("USERPROFILE", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join(".config"));
    (home, cmd)
}

#[test]
fn test_commands_before_init_fail_with_hint() {
    let (_home, mut cmd) = uninitialized();
    cmd.args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"))
        .stdout(predicate::str::contains("grotto init"));
}

#[test]
fn test_show_before_init_fails() {
    let (_home, mut cmd) = uninitialized();
    cmd.args(["show", "email/work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_error_exit_code_is_nonzero() {
    let t = Test::init();
    let output = t.show("ghost");
    assert_failure(&output);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_empty_store_hint_points_at_insert() {
    let t = Test::init();
    let output = t.list();
    assert_failure(&output);
    assert_stdout_contains(&output, "grotto insert");
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("grotto").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("mv"))
        .stdout(predicate::str::contains("cp"));
}

#[test]
fn test_completions_generate() {
    let mut cmd = Command::cargo_bin("grotto").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grotto"));
}

#[test]
fn test_missing_baseline_is_reported() {
    // Config exists but someone deleted the baseline branch.
    let t = Test::init();
    let repo = git2::Repository::open(t.store.path()).unwrap();
    repo.set_head_detached(
        repo.find_branch("grotto", git2::BranchType::Local)
            .unwrap()
            .get()
            .target()
            .unwrap(),
    )
    .unwrap();
    repo.find_branch("grotto", git2::BranchType::Local)
        .unwrap()
        .delete()
        .unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "baseline");
}
