//! Moving and copying secrets.
//!
//! Both operations duplicate the source branch, so the destination
//! inherits the full history, and commit one artifact rename on top.
//! Move drops the source branch ref afterwards; copy keeps it.

use tracing::{debug, info};

use super::Vault;
use crate::core::constants;
use crate::core::fsutil;
use crate::core::path::SecretPath;
use crate::core::repo::Stage;
use crate::error::{Result, StoreError};

impl Vault {
    /// Move the secret and its entire history from `old` to `new`.
    ///
    /// Ends on the baseline branch.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when `old` has no secret,
    /// `StoreError::AlreadyExists` when `new` already has one, and
    /// `StoreError::TaggedHistoryExists` when a removed secret's tag
    /// still occupies `new`.
    pub fn rename(&mut self, old: &SecretPath, new: &SecretPath) -> Result<()> {
        self.transfer(old, new, true)?;
        info!(old = %old, new = %new, "secret moved");
        Ok(())
    }

    /// Copy the secret and its entire history from `old` to `new`.
    ///
    /// The source stays untouched. Ends on the baseline branch.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Vault::rename`].
    pub fn copy(&mut self, old: &SecretPath, new: &SecretPath) -> Result<()> {
        self.transfer(old, new, false)?;
        info!(old = %old, new = %new, "secret copied");
        Ok(())
    }

    fn transfer(&mut self, old: &SecretPath, new: &SecretPath, drop_old: bool) -> Result<()> {
        let old_branch = old.branch();
        let new_branch = new.branch();
        debug!(old = %old, new = %new, drop_old, "transferring secret");

        if !self.repo.branch_exists(&old_branch) {
            return Err(StoreError::NotFound(old.to_string()).into());
        }
        if self.repo.branch_exists(&new_branch) {
            return Err(StoreError::AlreadyExists(new.to_string()).into());
        }
        // A tag at the destination would collide on the next removal.
        if self.repo.tag_exists(&new_branch) {
            return Err(StoreError::TaggedHistoryExists(new.to_string()).into());
        }

        self.repo.create_branch(&old_branch, &new_branch)?;
        self.repo.checkout_branch(&new_branch)?;
        if drop_old {
            self.repo.remove_branch(&old_branch)?;
        }

        let workdir = self.repo.workdir();
        fsutil::rename(&workdir.join(old.artifact()), &workdir.join(new.artifact()))?;
        fsutil::prune_empty_dirs(workdir, &old.artifact())?;

        let verb = if drop_old { "Moved" } else { "Copied" };
        self.repo.commit(
            &self.identity,
            Stage::All,
            &format!("{}: {} to {}", verb, old, new),
        )?;

        self.repo.checkout_branch(constants::BASELINE_BRANCH)?;
        Ok(())
    }
}
