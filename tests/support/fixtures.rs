//! Test fixtures and constants.

use std::path::Path;

use age::secrecy::SecretString;
use age::x25519;
use grotto::core::keyring;

/// The passphrase every generated test key is locked with.
pub const TEST_PASSPHRASE: &str = "correct horse battery staple";

/// A passphrase that never matches a generated key.
pub const WRONG_PASSPHRASE: &str = "wrong wrong wrong";

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("email/work", "sw0rdf1sh"),
    ("email/personal", "hunter2"),
    ("work/aws/root", "AKIA-not-really"),
    ("bank", "pin-1234"),
];

/// Write a locked age key file at `path`.
///
/// Uses a low scrypt work factor; unlocking in tests stays fast.
pub fn write_locked_key(path: &Path, passphrase: &str) {
    let identity = x25519::Identity::generate();
    let armored = keyring::lock_identity(
        &identity,
        &SecretString::from(passphrase.to_owned()),
        Some(2),
    )
    .expect("failed to lock test identity");
    std::fs::write(path, armored).expect("failed to write key file");
}

/// A unique secret path for tests that must not collide.
pub fn unique_path(prefix: &str) -> String {
    format!("{}/{}", prefix, uuid::Uuid::new_v4())
}
