//! The primary interface for grotto operations.
//!
//! Vault ties together the configuration, the store repository, and the
//! committer identity, and provides all secret operations. Every
//! operation drives the shared working tree through the same cycle:
//! check out the secret's branch, mutate, commit, and for operations
//! that end a secret's story, return to the baseline branch.

mod list;
mod secrets;
mod transfer;

use std::path::Path;

use ::age::secrecy::SecretString;
use ::age::x25519;
use tracing::{debug, info};

use crate::core::cipher;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::keyring::KeyRing;
use crate::core::path::SecretPath;
use crate::core::repo::{Identity, Repo};
use crate::error::{ConfigError, Error, Result, StoreError};

/// The primary interface for grotto operations.
///
/// Owns the config, the repository handle, and the committer identity.
/// This is the main entry point for all store interactions.
pub struct Vault {
    pub(super) config: Config,
    pub(super) repo: Repo,
    pub(super) identity: Identity,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("config", &self.config)
            .field("identity", &self.identity)
            .field("workdir", &self.repo.workdir())
            .finish()
    }
}

impl Vault {
    /// Open the store named by the saved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if no configuration exists
    /// and `StoreError::NotInitialized` if the baseline branch is gone.
    pub fn open() -> Result<Self> {
        Self::with_config(Config::load()?)
    }

    /// Open the store described by `config`, bypassing the config file.
    pub fn with_config(config: Config) -> Result<Self> {
        let repo = Repo::open(&config.repository.path)?;
        let identity = repo.identity()?;

        if !repo.branch_exists(constants::BASELINE_BRANCH) {
            return Err(StoreError::NotInitialized.into());
        }

        Ok(Self {
            config,
            repo,
            identity,
        })
    }

    /// Initialize grotto against an existing git repository.
    ///
    /// Verifies the key file unlocks with the prompted passphrase,
    /// creates the baseline branch when missing, checks it out, and
    /// persists the configuration. Pointing at a repository that
    /// already carries a baseline branch reconnects to it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` when a configuration
    /// file exists, plus anything `bootstrap` can fail with.
    pub fn init<F>(repository: &Path, key_file: &Path, prompt: F) -> Result<Self>
    where
        F: FnMut(u32) -> Result<SecretString>,
    {
        if Config::exists() {
            return Err(ConfigError::AlreadyInitialized(Config::config_path()?).into());
        }

        let vault = Self::bootstrap(repository, key_file, prompt)?;
        vault.config.save()?;
        info!(repository = %vault.config.repository.path.display(), "store initialized");
        Ok(vault)
    }

    /// Set up the store without persisting the configuration file.
    ///
    /// Everything `init` does except the save; callers that manage
    /// configuration themselves start here.
    pub fn bootstrap<F>(repository: &Path, key_file: &Path, prompt: F) -> Result<Self>
    where
        F: FnMut(u32) -> Result<SecretString>,
    {
        let repository = repository.canonicalize()?;
        let repo = Repo::open(&repository)?;
        let identity = repo.identity()?;

        // The passphrase must open the key before anything is written.
        let mut keyring = KeyRing::new();
        keyring.load(&read_key_file(key_file)?)?;
        keyring.unlock(constants::UNLOCK_ATTEMPTS, prompt)?;
        let recipient = keyring.recipient()?.to_string();

        if !repo.branch_exists(constants::BASELINE_BRANCH) {
            repo.create_orphan_branch(&identity, constants::BASELINE_BRANCH)?;
        } else {
            debug!("baseline branch present, reconnecting");
        }
        repo.checkout_branch(constants::BASELINE_BRANCH)?;

        let config = Config::new(repository, key_file.canonicalize()?, recipient);
        Ok(Self {
            config,
            repo,
            identity,
        })
    }

    /// Get config reference.
    ///
    /// Provides read-only access to the underlying configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The committer identity used for store commits.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Whether a secret currently lives at `path`.
    pub fn exists(&self, path: &SecretPath) -> bool {
        self.repo.branch_exists(&path.branch())
    }

    /// Whether a removed secret's frozen history sits at `path`.
    pub fn is_removed(&self, path: &SecretPath) -> bool {
        self.repo.tag_exists(&path.branch())
    }

    /// Load the configured key file into a fresh session.
    ///
    /// The session comes back locked; decryption paths unlock it with
    /// the user's passphrase.
    pub fn load_keyring(&self) -> Result<KeyRing> {
        let mut keyring = KeyRing::new();
        keyring.load(&read_key_file(&self.config.key.file)?)?;
        Ok(keyring)
    }
}

// Private helper functions shared across modules

/// Parse the configured recipient for encryption.
pub(super) fn recipients(config: &Config) -> Result<Vec<x25519::Recipient>> {
    Ok(vec![cipher::parse_recipient(&config.key.recipient)?])
}

fn read_key_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}
