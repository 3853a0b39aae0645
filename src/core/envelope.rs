//! Encryption envelope state machine.
//!
//! An [`Envelope`] wraps one secret message and tracks whether the
//! buffer currently holds plaintext or armored ciphertext. Every
//! transition is guarded: encrypting twice, decrypting plaintext, or
//! writing plaintext to disk are hard errors rather than silent
//! corruption. The buffer is zeroized on drop.

use std::path::{Path, PathBuf};

use ::age::x25519;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::fsutil;
use crate::core::keyring::KeyRing;
use crate::error::{EnvelopeError, Result};

/// A secret message on its way into or out of the store.
pub struct Envelope {
    message: Zeroizing<Vec<u8>>,
    encrypted: bool,
}

impl Envelope {
    /// Wrap a plaintext message.
    pub fn plaintext(message: impl Into<Vec<u8>>) -> Self {
        Self {
            message: Zeroizing::new(message.into()),
            encrypted: false,
        }
    }

    /// Wrap armored ciphertext read back from the store.
    pub fn ciphertext(message: impl Into<Vec<u8>>) -> Self {
        Self {
            message: Zeroizing::new(message.into()),
            encrypted: true,
        }
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn len(&self) -> usize {
        self.message.len()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.message
    }

    /// Consume the envelope, keeping the zeroizing buffer.
    pub fn take(self) -> Zeroizing<Vec<u8>> {
        self.message
    }

    /// Encrypt the message in place for `recipients`.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::AlreadyEncrypted` when the buffer already
    /// holds ciphertext and `EnvelopeError::EmptyMessage` when there is
    /// nothing to encrypt.
    pub fn encrypt(&mut self, recipients: &[x25519::Recipient]) -> Result<()> {
        if self.encrypted {
            return Err(EnvelopeError::AlreadyEncrypted.into());
        }
        if self.message.is_empty() {
            return Err(EnvelopeError::EmptyMessage.into());
        }

        let armored = cipher::encrypt(&self.message, recipients)?;
        self.message = Zeroizing::new(armored.into_bytes());
        self.encrypted = true;
        trace!(len = self.message.len(), "envelope sealed");
        Ok(())
    }

    /// Decrypt the message in place using an unlocked key session.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::NotEncrypted` when the buffer holds
    /// plaintext, `EnvelopeError::InvalidEnvelope` when the bytes are
    /// not an armored age envelope, and whatever state error the
    /// keyring reports when it is locked or spent.
    pub fn decrypt(&mut self, keyring: &KeyRing) -> Result<()> {
        if !self.encrypted {
            return Err(EnvelopeError::NotEncrypted.into());
        }
        cipher::ensure_armored(&self.message).map_err(EnvelopeError::InvalidEnvelope)?;

        let identity = keyring.identity()?;
        let plain = cipher::decrypt(&self.message, identity)?;
        self.message = Zeroizing::new(plain);
        self.encrypted = false;
        trace!(len = self.message.len(), "envelope opened");
        Ok(())
    }

    /// Write the ciphertext to `filename` under `dir`.
    ///
    /// Creates missing parent directories (0700) and refuses to touch an
    /// existing file. The file itself ends up 0600 on Unix.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::WritePlaintext` for an unencrypted
    /// buffer, `EnvelopeError::EmptyMessage` for an empty one, and
    /// `EnvelopeError::FileExists` when the target is already present.
    pub fn write_file(&self, dir: &Path, filename: &Path) -> Result<PathBuf> {
        if !self.encrypted {
            return Err(EnvelopeError::WritePlaintext.into());
        }
        if self.message.is_empty() {
            return Err(EnvelopeError::EmptyMessage.into());
        }

        let path = dir.join(filename);
        if path.exists() {
            return Err(EnvelopeError::FileExists(path).into());
        }

        fsutil::write_new(&path, &self.message)?;
        trace!(path = %path.display(), "artifact written");
        Ok(path)
    }
}
