//! Secret lifecycle operations.
//!
//! Insert, show, and remove drive a secret's branch through the shared
//! working tree. Remove never discards history: the branch becomes a
//! lightweight tag of the same name, and a later insert at that path
//! resurrects the branch from the tag.

use ::age::secrecy::SecretString;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{recipients, Vault};
use crate::core::constants;
use crate::core::envelope::Envelope;
use crate::core::fsutil;
use crate::core::keyring::KeyRing;
use crate::core::path::SecretPath;
use crate::core::repo::Stage;
use crate::error::{Result, StoreError};

impl Vault {
    /// Insert a new secret at `path`.
    ///
    /// The value is encrypted for the configured recipient and committed
    /// onto the secret's own branch. If a tag from an earlier removal
    /// exists at this path, the branch is resurrected from it first and
    /// the new value extends the old history.
    ///
    /// The working tree is left on the secret's branch.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` when a live secret occupies
    /// the path and `EnvelopeError::EmptyMessage` for an empty value.
    pub fn insert(&mut self, path: &SecretPath, value: &[u8]) -> Result<()> {
        let branch = path.branch();
        debug!(path = %path, "inserting secret");

        if self.repo.branch_exists(&branch) {
            return Err(StoreError::AlreadyExists(path.to_string()).into());
        }

        // A rejected value must not leave a branch behind.
        let mut envelope = Envelope::plaintext(value.to_vec());
        envelope.encrypt(&recipients(&self.config)?)?;

        if self.repo.tag_exists(&branch) {
            self.repo.branch_from_tag(&branch)?;
            // A path carries a branch or a tag, never both.
            self.repo.delete_tag(&branch)?;
            info!(path = %path, "history restored from tag");
        } else {
            self.repo.create_orphan_branch(&self.identity, &branch)?;
        }
        self.repo.checkout_branch(&branch)?;

        envelope.write_file(self.repo.workdir(), &path.artifact())?;

        self.repo.commit(
            &self.identity,
            Stage::Path(&path.artifact()),
            &format!("Add: {}", path),
        )?;

        info!(path = %path, "secret added");
        Ok(())
    }

    /// Decrypt and return the secret at `path`.
    ///
    /// Unlocks `keyring` with `prompt` if it is still locked, checks out
    /// the secret's branch, and opens the artifact. The plaintext comes
    /// back in a zeroizing buffer; it never touches disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no secret lives at `path`,
    /// `StoreError::MissingArtifact` when the branch lost its artifact
    /// file, and the keyring's error when unlocking fails.
    pub fn show<F>(
        &mut self,
        path: &SecretPath,
        keyring: &mut KeyRing,
        prompt: F,
    ) -> Result<Zeroizing<Vec<u8>>>
    where
        F: FnMut(u32) -> Result<SecretString>,
    {
        let branch = path.branch();
        debug!(path = %path, "showing secret");

        if !self.repo.branch_exists(&branch) {
            return Err(StoreError::NotFound(path.to_string()).into());
        }
        self.repo.checkout_branch(&branch)?;

        let artifact = self.repo.workdir().join(path.artifact());
        if !artifact.exists() {
            return Err(StoreError::MissingArtifact(branch).into());
        }
        let ciphertext = std::fs::read(&artifact)?;

        keyring.unlock(constants::UNLOCK_ATTEMPTS, prompt)?;

        let mut envelope = Envelope::ciphertext(ciphertext);
        envelope.decrypt(keyring)?;
        Ok(envelope.take())
    }

    /// Remove the secret at `path`, freezing its history.
    ///
    /// Commits the artifact's deletion, tags the branch tip under the
    /// same name, returns the working tree to the baseline branch, and
    /// drops the branch ref. The tag keeps every commit reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no secret lives at `path`.
    pub fn remove(&mut self, path: &SecretPath) -> Result<()> {
        let branch = path.branch();
        debug!(path = %path, "removing secret");

        if !self.repo.branch_exists(&branch) {
            return Err(StoreError::NotFound(path.to_string()).into());
        }
        self.repo.checkout_branch(&branch)?;

        let artifact = self.repo.workdir().join(path.artifact());
        std::fs::remove_file(&artifact)?;
        fsutil::prune_empty_dirs(self.repo.workdir(), &path.artifact())?;

        self.repo
            .commit(&self.identity, Stage::All, &format!("Remove: {}", path))?;
        self.repo.tag_branch(&branch)?;

        // libgit2 refuses to delete the checked-out branch; step back
        // to the baseline before dropping the ref.
        self.repo.checkout_branch(constants::BASELINE_BRANCH)?;
        self.repo.remove_branch(&branch)?;

        info!(path = %path, "secret removed");
        Ok(())
    }
}
