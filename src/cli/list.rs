//! List command.
//!
//! Renders the stored secret names as a namespace tree.

use tracing::info;

use crate::core::vault::Vault;
use crate::error::Result;

/// List stored secrets, optionally filtered by a path prefix.
pub fn execute(prefix: Option<&str>, json: bool) -> Result<()> {
    info!(?prefix, "listing secrets");

    let vault = Vault::open()?;
    let tree = vault.list(prefix)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        print!("{}", tree.render());
    }
    Ok(())
}
