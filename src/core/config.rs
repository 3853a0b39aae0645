//! Configuration file management.
//!
//! Handles reading, writing, and validating the user-level
//! `grotto/config.toml` file. The configuration ties one command
//! invocation to a store repository, a locked key file, and the public
//! recipient secrets are encrypted for.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration stored under the platform config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration
    pub grotto: Meta,
    /// The git repository holding the store
    pub repository: Repository,
    /// The private key and its public recipient
    pub key: Key,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Store repository section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Absolute path of the git repository
    pub path: PathBuf,
}

/// Key material section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    /// Absolute path of the passphrase-protected identity file
    pub file: PathBuf,
    /// Public recipient derived from the identity (age1...)
    pub recipient: String,
}

impl Config {
    /// Create a configuration with the current crate version.
    pub fn new(repository: PathBuf, key_file: PathBuf, recipient: String) -> Self {
        Self {
            grotto: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            repository: Repository { path: repository },
            key: Key {
                file: key_file,
                recipient,
            },
        }
    }

    /// Path of the configuration file (`<config-dir>/grotto/config.toml`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` when the platform config
    /// directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Check if a configuration file exists.
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load and validate the configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;

        debug!(
            repository = %config.repository.path.display(),
            "config loaded"
        );
        Ok(config)
    }

    /// Save the configuration, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        debug!(path = %path.display(), "saving config");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field looks like semver
    /// - Repository and key paths are absolute
    /// - The recipient parses as an age public key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingField`
    /// on validation failure.
    pub fn validate(&self) -> Result<()> {
        use crate::core::cipher;

        if self.grotto.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }
        let version_parts: Vec<&str> = self.grotto.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.grotto.version),
            }
            .into());
        }

        ensure_absolute("repository.path", &self.repository.path)?;
        ensure_absolute("key.file", &self.key.file)?;

        if cipher::parse_recipient(&self.key.recipient).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "key.recipient",
                reason: format!("invalid age public key: {}", self.key.recipient),
            }
            .into());
        }

        Ok(())
    }
}

fn ensure_absolute(field: &'static str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    if !path.is_absolute() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("not an absolute path: {}", path.display()),
        }
        .into());
    }
    Ok(())
}
