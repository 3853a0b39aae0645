//! Init command - connect a repository and key file.

use std::path::Path;

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::vault::Vault;
use crate::error::Result;

/// Initialize grotto against an existing git repository.
///
/// The passphrase is verified against the key file before anything is
/// persisted; a repository that already carries a baseline branch is
/// reconnected instead of re-seeded.
pub fn execute(repository: &Path, key: &Path) -> Result<()> {
    info!(repository = %repository.display(), "initializing");

    let vault = Vault::init(repository, key, prompt::unlock())?;

    output::success("initialized");
    output::kv("repository:", vault.config().repository.path.display());
    output::kv("key file:", vault.config().key.file.display());
    output::kv("recipient:", &vault.config().key.recipient);
    Ok(())
}
