//! Tests for `grotto mv` and `grotto cp` commands.

use crate::support::*;

#[test]
fn test_mv_renames_secret() {
    let t = Test::with_secrets(&[("email/work", "v")]);

    let output = t.mv("email/work", "email/personal");
    assert_success(&output);
    assert_stdout_contains(&output, "moved");

    assert_eq!(t.branch_names(), vec!["email/personal.age", "grotto"]);
    assert_stdout_contains(&t.show("email/personal"), "v");

    let output = t.show("email/work");
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}

#[test]
fn test_mv_cleans_leftover_directories() {
    let t = Test::with_secrets(&[("deep/nested/secret", "v")]);

    assert_success(&t.mv("deep/nested/secret", "flat"));

    assert!(!t.store.path().join("deep").exists());
    assert_stdout_contains(&t.show("flat"), "v");
}

#[test]
fn test_mv_to_occupied_path_fails() {
    let t = Test::with_secrets(&[("a", "va"), ("b", "vb")]);

    let output = t.mv("a", "b");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");

    // Both survive the refused move.
    assert_stdout_contains(&t.show("a"), "va");
    assert_stdout_contains(&t.show("b"), "vb");
}

#[test]
fn test_mv_missing_source_fails() {
    let t = Test::with_secrets(&[("present", "v")]);

    let output = t.mv("ghost", "elsewhere");
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}

#[test]
fn test_cp_keeps_both_secrets() {
    let t = Test::with_secrets(&[("a", "v")]);

    let output = t.cp("a", "b");
    assert_success(&output);
    assert_stdout_contains(&output, "copied");

    assert_eq!(t.branch_names(), vec!["a.age", "b.age", "grotto"]);
    assert_stdout_contains(&t.show("a"), "v");
    assert_stdout_contains(&t.show("b"), "v");
}

#[test]
fn test_transfer_returns_to_baseline() {
    let t = Test::with_secrets(&[("a", "v")]);
    assert_success(&t.cp("a", "b"));

    let repo = git2::Repository::open(t.store.path()).unwrap();
    assert_eq!(repo.head().unwrap().shorthand(), Some("grotto"));
}
