//! Cryptographic operations.
//!
//! Provides the encryption/decryption abstraction and the age backend.
//! All ciphertext leaving this module is ASCII armored so it survives
//! inside a git working tree as plain text.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;
use ::age::x25519;

mod age;

pub use age::{parse_recipient, Age};
pub(crate) use age::ensure_armored;

/// Cryptographic backend trait.
///
/// Abstracts encryption and decryption so the envelope layer never
/// depends on a concrete cipher.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for multiple recipients.
    ///
    /// Returns an ASCII-armored envelope any recipient can open.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &[u8], recipients: &[Self::Recipient]) -> Result<String>;

    /// Decrypt an armored envelope using a private identity.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if decryption fails.
    fn decrypt(&self, armored: &[u8], identity: &Self::Identity) -> Result<Vec<u8>>;

    /// Backend name for display/config.
    #[allow(dead_code)]
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext for multiple age recipients.
///
/// Convenience wrapper around `Age::encrypt`.
pub fn encrypt(plaintext: &[u8], recipients: &[x25519::Recipient]) -> Result<String> {
    Age.encrypt(plaintext, recipients)
}

/// Decrypt an age envelope using a private identity.
///
/// Convenience wrapper around `Age::decrypt`.
pub fn decrypt(armored: &[u8], identity: &x25519::Identity) -> Result<Vec<u8>> {
    Age.decrypt(armored, identity)
}
