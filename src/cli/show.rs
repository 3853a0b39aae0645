//! Show command.
//!
//! Decrypts a secret and prints the plaintext to stdout. Nothing else
//! goes to stdout, so the output can be piped.

use std::io::Write;

use tracing::info;

use crate::cli::prompt;
use crate::core::path::SecretPath;
use crate::core::vault::Vault;
use crate::error::Result;

/// Decrypt and print the secret at `path`.
pub fn execute(path: &str) -> Result<()> {
    let path = SecretPath::new(path)?;
    info!(path = %path, "showing secret");

    let mut vault = Vault::open()?;
    let mut keyring = vault.load_keyring()?;
    let plaintext = vault.show(&path, &mut keyring, prompt::unlock())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&plaintext)?;
    if !plaintext.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
