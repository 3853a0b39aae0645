//! Mv command.

use tracing::info;

use crate::cli::output;
use crate::core::path::SecretPath;
use crate::core::vault::Vault;
use crate::error::Result;

/// Move a secret and its entire history to a new path.
pub fn execute(old: &str, new: &str) -> Result<()> {
    let old = SecretPath::new(old)?;
    let new = SecretPath::new(new)?;
    info!(old = %old, new = %new, "moving secret");

    let mut vault = Vault::open()?;
    vault.rename(&old, &new)?;

    output::success(&format!(
        "moved {} to {}",
        output::secret(&old),
        output::secret(&new)
    ));
    Ok(())
}
