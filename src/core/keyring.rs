//! Private-key session handling.
//!
//! A [`KeyRing`] carries the passphrase-protected age identity for one
//! command invocation. The key file on disk is an armored age envelope
//! whose payload is the identity itself, so it is useless without the
//! passphrase. Loading and unlocking are separate steps: operations
//! that only encrypt never ask for the passphrase.
//!
//! State machine: empty -> loaded (locked) -> unlocked. Burning all
//! passphrase attempts spends the session permanently.

use std::io::{Read, Write};

use ::age::secrecy::{ExposeSecret, SecretString};
use ::age::x25519;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::error::{CipherError, Error, KeyringError, Result};

/// Per-invocation private key session.
pub struct KeyRing {
    raw: Option<Zeroizing<Vec<u8>>>,
    identity: Option<x25519::Identity>,
    exhausted: bool,
}

impl KeyRing {
    pub fn new() -> Self {
        Self {
            raw: None,
            identity: None,
            exhausted: false,
        }
    }

    /// Load the armored bytes of a locked key file.
    ///
    /// The bytes must parse as an armored age envelope; nothing is
    /// decrypted yet.
    ///
    /// # Errors
    ///
    /// Returns `KeyringError::AlreadyLoaded` on a second call and
    /// `KeyringError::NotArmoredKey` when the bytes are not an armored
    /// envelope.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        if self.raw.is_some() || self.identity.is_some() {
            return Err(KeyringError::AlreadyLoaded.into());
        }

        super::cipher::ensure_armored(bytes).map_err(KeyringError::NotArmoredKey)?;

        trace!(len = bytes.len(), "loaded locked key");
        self.raw = Some(Zeroizing::new(bytes.to_vec()));
        Ok(())
    }

    /// Unlock the loaded key, asking `prompt` for the passphrase.
    ///
    /// `prompt` receives the 1-based attempt number. A wrong passphrase
    /// consumes an attempt; burning all of them spends the session for
    /// good. Unlocking an already unlocked ring is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `KeyringError::AttemptsExceeded` when every attempt
    /// failed, `KeyringError::WrongKeyType` when the key file is not
    /// passphrase-protected or does not contain an identity, and any
    /// error the prompt itself produces.
    pub fn unlock<F>(&mut self, max_attempts: u32, mut prompt: F) -> Result<()>
    where
        F: FnMut(u32) -> Result<SecretString>,
    {
        if self.exhausted {
            return Err(KeyringError::Exhausted.into());
        }
        if self.identity.is_some() {
            return Ok(());
        }
        let raw = self.raw.as_ref().ok_or(KeyringError::NotLoaded)?;

        for attempt in 1..=max_attempts {
            let passphrase = prompt(attempt)?;
            match unwrap_identity(raw, &passphrase) {
                Ok(identity) => {
                    debug!(attempt, "key unlocked");
                    self.identity = Some(identity);
                    return Ok(());
                }
                Err(Error::Keyring(KeyringError::BadPassphrase)) => {
                    debug!(attempt, "wrong passphrase");
                }
                Err(e) => return Err(e),
            }
        }

        self.exhausted = true;
        Err(KeyringError::AttemptsExceeded(max_attempts).into())
    }

    /// The unlocked identity.
    ///
    /// # Errors
    ///
    /// Reports the exact state the session is stuck in: spent, never
    /// loaded, or still locked.
    pub fn identity(&self) -> Result<&x25519::Identity> {
        if self.exhausted {
            return Err(KeyringError::Exhausted.into());
        }
        match (&self.identity, &self.raw) {
            (Some(identity), _) => Ok(identity),
            (None, Some(_)) => Err(KeyringError::Locked.into()),
            (None, None) => Err(KeyringError::NotLoaded.into()),
        }
    }

    /// Public recipient derived from the unlocked identity.
    pub fn recipient(&self) -> Result<x25519::Recipient> {
        Ok(self.identity()?.to_public())
    }

    pub fn is_unlocked(&self) -> bool {
        self.identity.is_some() && !self.exhausted
    }
}

impl Default for KeyRing {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap an identity into an armored, passphrase-protected key file.
///
/// `work_factor` overrides the scrypt cost (log2); `None` keeps the
/// default, which is what key files in the wild should use.
///
/// # Errors
///
/// Returns `CipherError` if the envelope cannot be produced.
pub fn lock_identity(
    identity: &x25519::Identity,
    passphrase: &SecretString,
    work_factor: Option<u8>,
) -> Result<String> {
    let mut recipient = age::scrypt::Recipient::new(derive_secret(passphrase));
    if let Some(log_n) = work_factor {
        recipient.set_work_factor(log_n);
    }

    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(age::armor::ArmoredWriter::wrap_output(
            &mut encrypted,
            age::armor::Format::AsciiArmor,
        )?)
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    // Display via secrecy outputs AGE-SECRET-KEY-...
    let secret_str = identity.to_string();
    writer.write_all(secret_str.expose_secret().as_bytes())?;
    writer.write_all(b"\n")?;

    let armored = writer
        .finish()
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
    armored
        .finish()
        .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

    String::from_utf8(encrypted)
        .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
}

/// Open a locked key file with one passphrase attempt.
fn unwrap_identity(armored: &[u8], passphrase: &SecretString) -> Result<x25519::Identity> {
    let reader = age::armor::ArmoredReader::new(armored);
    let decryptor = age::Decryptor::new(reader)
        .map_err(|e| KeyringError::NotArmoredKey(format!("{}", e)))?;

    let scrypt = age::scrypt::Identity::new(derive_secret(passphrase));
    let mut reader = match decryptor.decrypt(std::iter::once(&scrypt as &dyn age::Identity)) {
        Ok(reader) => reader,
        Err(age::DecryptError::NoMatchingKeys) => {
            return Err(KeyringError::WrongKeyType(
                "the key file is not passphrase-protected".to_string(),
            )
            .into())
        }
        Err(age::DecryptError::DecryptionFailed) => {
            return Err(KeyringError::BadPassphrase.into())
        }
        Err(e) => return Err(CipherError::DecryptionFailed(format!("{}", e)).into()),
    };

    let mut payload = Zeroizing::new(Vec::new());
    reader.read_to_end(&mut payload)?;

    let text = std::str::from_utf8(&payload).map_err(|_| {
        KeyringError::WrongKeyType("the decrypted payload is not text".to_string())
    })?;
    text.trim()
        .parse::<x25519::Identity>()
        .map_err(|e: &str| KeyringError::WrongKeyType(e.to_string()).into())
}

// secrecy keeps SecretString hard to clone on purpose; rebuild one
// from the exposed slice where the age API wants ownership.
fn derive_secret(passphrase: &SecretString) -> SecretString {
    SecretString::from(passphrase.expose_secret().to_owned())
}
