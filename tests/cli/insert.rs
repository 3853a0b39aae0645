//! Tests for `grotto insert` command.

use crate::support::*;

#[test]
fn test_insert_and_show_roundtrip() {
    let t = Test::init();
    assert_roundtrip(&t, "email/work", "sw0rdf1sh");
}

#[test]
fn test_insert_creates_secret_branch() {
    let t = Test::init();

    let output = t.insert("email/work", "v");
    assert_success(&output);
    assert_stdout_contains(&output, "added");

    assert_eq!(t.branch_names(), vec!["email/work.age", "grotto"]);
}

#[test]
fn test_insert_duplicate_fails() {
    let t = Test::with_secrets(&[("dup", "one")]);

    let output = t.insert("dup", "two");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");

    // The stored value is untouched.
    let output = t.show("dup");
    assert_stdout_contains(&output, "one");
}

#[test]
fn test_insert_mismatched_entries_fails_cleanly() {
    let t = Test::init();

    let output = t.insert_mismatched("email/work", "first", "second");
    assert_failure(&output);
    assert_stderr_contains(&output, "do not match");

    // No branch was left behind; the path is still insertable.
    assert_eq!(t.branch_names(), vec!["grotto"]);
    assert_success(&t.insert("email/work", "third"));
}

#[test]
fn test_insert_rejects_reserved_name() {
    let t = Test::init();

    let output = t.insert("grotto", "v");
    assert_failure(&output);
    assert_stderr_contains(&output, "reserved");
}

#[test]
fn test_insert_rejects_invalid_path() {
    let t = Test::init();

    assert_failure(&t.insert("has space", "v"));
    assert_failure(&t.insert("a//b", "v"));
    assert_failure(&t.insert(".hidden", "v"));
}

#[test]
fn test_insert_unique_nested_paths() {
    let t = Test::init();

    let a = unique_path("work");
    let b = unique_path("work");
    assert_success(&t.insert(&a, "va"));
    assert_success(&t.insert(&b, "vb"));

    assert_stdout_contains(&t.show(&a), "va");
    assert_stdout_contains(&t.show(&b), "vb");
}
