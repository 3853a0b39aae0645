//! Cp command.

use tracing::info;

use crate::cli::output;
use crate::core::path::SecretPath;
use crate::core::vault::Vault;
use crate::error::Result;

/// Copy a secret and its entire history to a second path.
pub fn execute(old: &str, new: &str) -> Result<()> {
    let old = SecretPath::new(old)?;
    let new = SecretPath::new(new)?;
    info!(old = %old, new = %new, "copying secret");

    let mut vault = Vault::open()?;
    vault.copy(&old, &new)?;

    output::success(&format!(
        "copied {} to {}",
        output::secret(&old),
        output::secret(&new)
    ));
    Ok(())
}
