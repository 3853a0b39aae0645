//! Rm command.
//!
//! Removal is a soft delete: the branch's final state is frozen behind
//! a tag, and a later insert at the same path restores the history.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::path::SecretPath;
use crate::core::vault::Vault;
use crate::error::{Result, StoreError};

/// Remove the secret at `path` after confirmation.
pub fn execute(path: &str) -> Result<()> {
    let path = SecretPath::new(path)?;
    info!(path = %path, "removing secret");

    let mut vault = Vault::open()?;

    // Confirm against a secret that actually exists.
    if !vault.exists(&path) {
        return Err(StoreError::NotFound(path.to_string()).into());
    }

    // Declining is a no-op, not an error.
    if !prompt::confirm(&format!("Remove {}?", path))? {
        output::dimmed("nothing removed");
        return Ok(());
    }

    vault.remove(&path)?;
    output::success(&format!("removed {}", output::secret(&path)));
    Ok(())
}
