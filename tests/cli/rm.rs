//! Tests for `grotto rm` command.

use crate::support::*;

#[test]
fn test_rm_declined_is_a_noop() {
    let t = Test::with_secrets(&[("keep", "v")]);

    let output = t.rm("keep", "n");
    assert_success(&output);
    assert_stdout_contains(&output, "nothing removed");

    assert_stdout_contains(&t.show("keep"), "v");
}

#[test]
fn test_rm_converts_branch_to_tag() {
    let t = Test::with_secrets(&[("gone", "v")]);

    let output = t.rm("gone", "y");
    assert_success(&output);
    assert_stdout_contains(&output, "removed");

    assert_eq!(t.branch_names(), vec!["grotto"]);
    assert!(t.tag_exists("gone.age"));

    let output = t.show("gone");
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}

#[test]
fn test_rm_missing_secret_fails() {
    let t = Test::with_secrets(&[("present", "v")]);

    let output = t.rm("ghost", "y");
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}

#[test]
fn test_rm_then_insert_restores_history() {
    let t = Test::with_secrets(&[("email/work", "first")]);

    assert_success(&t.rm("email/work", "y"));
    let output = t.insert("email/work", "second");
    assert_success(&output);
    assert_stdout_contains(&output, "restored");

    // The restored branch extends the frozen history: seed, first add,
    // removal, second add.
    let repo = git2::Repository::open(t.store.path()).unwrap();
    let mut walk = repo.revwalk().unwrap();
    walk.push_ref("refs/heads/email/work.age").unwrap();
    assert_eq!(walk.count(), 4);

    // The tag was consumed by the restore.
    assert!(!t.tag_exists("email/work.age"));
    assert_stdout_contains(&t.show("email/work"), "second");
}

#[test]
fn test_rm_returns_to_baseline() {
    let t = Test::with_secrets(&[("gone", "v")]);
    assert_success(&t.rm("gone", "y"));

    let repo = git2::Repository::open(t.store.path()).unwrap();
    assert_eq!(repo.head().unwrap().shorthand(), Some("grotto"));
}
