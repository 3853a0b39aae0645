//! Constants used throughout grotto.
//!
//! Centralizes magic strings and configuration values.

/// Name of the baseline branch the store rests on between operations.
pub const BASELINE_BRANCH: &str = "grotto";

/// Suffix shared by secret branches and their artifact files.
pub const ARTIFACT_SUFFIX: &str = ".age";

/// Seed file committed by every orphan branch's initial commit.
pub const SEED_FILE: &str = ".empty";

/// Message of the seed commit on a fresh orphan branch.
pub const INITIAL_COMMIT: &str = "Initial commit.";

/// Configuration directory name under the platform config root.
pub const CONFIG_DIR: &str = "grotto";

/// Configuration file name (grotto/config.toml).
pub const CONFIG_FILE: &str = "config.toml";

/// Passphrase attempts allowed before a key session is spent.
pub const UNLOCK_ATTEMPTS: u32 = 3;
