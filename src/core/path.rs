//! Secret path names and their branch mapping.
//!
//! A [`SecretPath`] is a validated, slash-separated name such as
//! `email/work`. Appending [`ARTIFACT_SUFFIX`](crate::core::constants)
//! yields both the branch that holds the secret's history and the
//! relative path of the encrypted artifact inside the working tree.

use std::fmt;
use std::path::PathBuf;

use crate::core::constants;
use crate::error::{PathError, Result};

/// A validated secret name.
///
/// Paths are rejected when empty, when they collide with the baseline
/// branch name, or when they would not survive as a git reference
/// (empty segments, dot-prefixed segments, `..`, unsupported characters).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecretPath(String);

impl SecretPath {
    /// Validate `raw` and wrap it as a secret path.
    ///
    /// # Errors
    ///
    /// Returns `PathError` describing the first rule the input breaks.
    pub fn new(raw: &str) -> Result<Self> {
        validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Recover a secret path from a branch name.
    ///
    /// Returns `None` for the baseline branch, for branches without the
    /// artifact suffix, and for stems that fail validation. Foreign
    /// branches in a shared repository fall through here silently.
    pub fn from_branch(branch: &str) -> Option<Self> {
        let stem = branch.strip_suffix(constants::ARTIFACT_SUFFIX)?;
        Self::new(stem).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the branch that holds this secret's history.
    pub fn branch(&self) -> String {
        format!("{}{}", self.0, constants::ARTIFACT_SUFFIX)
    }

    /// Relative path of the encrypted artifact inside the working tree.
    ///
    /// Identical to the branch name; nested segments become directories.
    pub fn artifact(&self) -> PathBuf {
        PathBuf::from(self.branch())
    }

    /// The slash-separated namespace segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for SecretPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate(raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Err(PathError::Empty.into());
    }

    if raw == constants::BASELINE_BRANCH {
        return Err(PathError::Reserved(raw.to_string()).into());
    }

    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || matches!(ch, '/' | '-' | '_' | '.' | '@');
        if !ok {
            return Err(PathError::InvalidChar {
                path: raw.to_string(),
                ch,
            }
            .into());
        }
    }

    // Double dots never form a valid git reference.
    if raw.contains("..") {
        return Err(PathError::InvalidSegment {
            path: raw.to_string(),
            reason: "`..` is not allowed",
        }
        .into());
    }

    for segment in raw.split('/') {
        if segment.is_empty() {
            return Err(PathError::EmptySegment(raw.to_string()).into());
        }
        if segment.starts_with('.') {
            return Err(PathError::InvalidSegment {
                path: raw.to_string(),
                reason: "segments cannot start with a dot",
            }
            .into());
        }
        if segment.ends_with('.') {
            return Err(PathError::InvalidSegment {
                path: raw.to_string(),
                reason: "segments cannot end with a dot",
            }
            .into());
        }
        if segment.ends_with(".lock") {
            return Err(PathError::InvalidSegment {
                path: raw.to_string(),
                reason: "segments cannot end with `.lock`",
            }
            .into());
        }
    }

    Ok(())
}
