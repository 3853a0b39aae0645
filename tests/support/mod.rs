//! Test support utilities for grotto integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own store repository, home directory, and locked
/// key file. No process-global state is mutated — child processes get
/// their own HOME and XDG_CONFIG_HOME, so tests can safely run in
/// parallel.
pub struct Test {
    /// Temporary directory holding the store repository
    pub store: TempDir,
    /// Temporary home directory (configuration lands below it)
    pub home: TempDir,
    /// Path of the locked key file
    pub key: PathBuf,
}

impl Test {
    /// Create a new environment: a git repository with a committer
    /// identity, a locked key file, and an empty home. Grotto itself is
    /// not initialized yet.
    pub fn new() -> Self {
        let store = TempDir::new().expect("failed to create store dir");
        let home = TempDir::new().expect("failed to create temp home");

        let repo = git2::Repository::init(store.path()).expect("failed to init git repo");
        let mut config = repo.config().expect("failed to open git config");
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let key = home.path().join("key.age");
        fixtures::write_locked_key(&key, fixtures::TEST_PASSPHRASE);

        Self { store, home, key }
    }

    /// Create an environment with `grotto init` already run.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with secrets inserted.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (path, value) in secrets {
            let output = t.insert(path, value);
            assert!(
                output.status.success(),
                "failed to insert {}: {}",
                path,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }
}
