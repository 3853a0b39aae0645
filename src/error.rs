//! Error types for grotto.
//!
//! Every fallible operation in the crate returns [`Result`]. The top-level
//! [`Error`] fans out into one enum per subsystem so callers can match on
//! the failure class without string inspection.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Keyring(#[from] KeyringError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures loading, parsing, or validating the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no configuration file found")]
    NotInitialized,

    #[error("already initialized: configuration exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("could not determine the platform configuration directory")]
    NoConfigDir,

    #[error("failed to read configuration: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("missing configuration field: {field}")]
    MissingField { field: &'static str },
}

/// Failures against the branch store itself.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store not initialized: baseline branch is missing")]
    NotInitialized,

    #[error("secret already exists: {0}")]
    AlreadyExists(String),

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("no secrets stored yet")]
    EmptyStore,

    #[error("secret branch {0} has no artifact file")]
    MissingArtifact(String),

    #[error("removed secret history already occupies {0} (insert it to restore, or pick another path)")]
    TaggedHistoryExists(String),

    #[error("repository has no working tree: {0}")]
    BareRepository(PathBuf),
}

/// Failures in the private-key session.
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("not an armored age private key: {0}")]
    NotArmoredKey(String),

    #[error("wrong key type: {0}")]
    WrongKeyType(String),

    #[error("a private key is already loaded")]
    AlreadyLoaded,

    #[error("no private key loaded")]
    NotLoaded,

    #[error("the private key is still locked")]
    Locked,

    #[error("incorrect passphrase")]
    BadPassphrase,

    #[error("no passphrase attempts remaining (tried {0})")]
    AttemptsExceeded(u32),

    #[error("the key session is spent; start over")]
    Exhausted,

    #[error("the entered values do not match")]
    PassphraseMismatch,
}

/// Violations of the encryption envelope state machine.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("the message is already encrypted")]
    AlreadyEncrypted,

    #[error("the message is not encrypted")]
    NotEncrypted,

    #[error("not an age envelope: {0}")]
    InvalidEnvelope(String),

    #[error("refusing to write plaintext to disk")]
    WritePlaintext,

    #[error("the message is empty")]
    EmptyMessage,

    #[error("file already exists: {0}")]
    FileExists(PathBuf),
}

/// Failures inside the cipher backend.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor failed: {0}")]
    ArmorFailed(String),

    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),
}

/// Rejected secret paths.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("secret path is empty")]
    Empty,

    #[error("`{0}` is reserved")]
    Reserved(String),

    #[error("empty segment in secret path: {0}")]
    EmptySegment(String),

    #[error("invalid secret path {path}: {reason}")]
    InvalidSegment { path: String, reason: &'static str },

    #[error("invalid character {ch:?} in secret path {path}")]
    InvalidChar { path: String, ch: char },
}

/// Missing committer identity in the git configuration.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("git identity is incomplete: user.{0} is not set")]
    Missing(&'static str),
}
