//! Insert command.
//!
//! Interactively store a secret with hidden, double-entered input.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::path::SecretPath;
use crate::core::vault::Vault;
use crate::error::{Result, StoreError};

/// Insert a secret at `path`.
pub fn execute(path: &str) -> Result<()> {
    let path = SecretPath::new(path)?;
    info!(path = %path, "inserting secret");

    let mut vault = Vault::open()?;

    // Fail before the user types anything.
    if vault.exists(&path) {
        return Err(StoreError::AlreadyExists(path.to_string()).into());
    }
    if vault.is_removed(&path) {
        output::warn(&format!(
            "{} was removed earlier; its history will be restored",
            output::secret(&path)
        ));
    }

    let value = prompt::new_value(path.as_str())?;
    vault.insert(&path, &value)?;

    output::success(&format!("added {}", output::secret(&path)));
    Ok(())
}
