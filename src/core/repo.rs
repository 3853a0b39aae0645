//! Version control operations.
//!
//! Facade over libgit2. Upper layers (vault, cli) go through [`Repo`]
//! and never touch git2 directly, so the branch plumbing that makes the
//! store work stays in one place:
//!
//! - every secret lives on its own parentless branch
//! - a shared working tree is switched with forced checkouts
//! - removal converts a branch into a lightweight tag of the same name
//!
//! All refs are local; nothing here talks to a remote.

use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::{BranchType, IndexAddOption};
use tracing::{debug, trace};

use crate::core::constants;
use crate::error::{IdentityError, Result, StoreError};

/// Committer identity read from the repository's git configuration.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// What to stage for a commit.
pub enum Stage<'a> {
    /// A single path relative to the working tree root.
    Path(&'a Path),
    /// Everything, including deletions.
    All,
}

/// A non-bare git repository holding the secret store.
pub struct Repo {
    inner: git2::Repository,
    workdir: PathBuf,
}

impl Repo {
    /// Open an existing repository at `path`.
    ///
    /// # Errors
    ///
    /// Fails when `path` is not a git repository or when the repository
    /// is bare; the store needs a working tree for artifact files.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::open(path)?;
        let workdir = inner
            .workdir()
            .ok_or_else(|| StoreError::BareRepository(path.to_path_buf()))?
            .to_path_buf();
        trace!(path = %workdir.display(), "repository opened");
        Ok(Self { inner, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Committer identity from `user.name` / `user.email`.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Missing` naming the first unset field.
    pub fn identity(&self) -> Result<Identity> {
        let config = self.inner.config()?;
        let name = config
            .get_string("user.name")
            .map_err(|_| IdentityError::Missing("name"))?;
        let email = config
            .get_string("user.email")
            .map_err(|_| IdentityError::Missing("email"))?;
        Ok(Identity { name, email })
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.inner.find_branch(name, BranchType::Local).is_ok()
    }

    pub fn tag_exists(&self, name: &str) -> bool {
        self.inner
            .find_reference(&format!("refs/tags/{}", name))
            .is_ok()
    }

    /// Names of all local branches, skipping any that are not UTF-8.
    pub fn branch_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in self.inner.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Shorthand of the branch HEAD points at, or `None` when HEAD is
    /// unborn or detached.
    pub fn current_branch(&self) -> Result<Option<String>> {
        match self.inner.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_owned)),
            Ok(_) => Ok(None),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Force-checkout `name` and point HEAD at it.
    ///
    /// Tracked files from the previous branch disappear from the
    /// working tree; untracked files are left alone.
    pub fn checkout_branch(&self, name: &str) -> Result<()> {
        let refname = format!("refs/heads/{}", name);
        let target = self.inner.revparse_single(&refname)?;

        let mut checkout = CheckoutBuilder::new();
        checkout.force();
        self.inner.checkout_tree(&target, Some(&mut checkout))?;
        self.inner.set_head(&refname)?;

        debug!(branch = name, "checked out");
        Ok(())
    }

    /// Create a parentless branch seeded with a single commit that
    /// contains only the `.empty` file.
    pub fn create_orphan_branch(&self, identity: &Identity, name: &str) -> Result<()> {
        let signature = signature(identity)?;

        let blob = self.inner.blob(b"")?;
        let mut builder = self.inner.treebuilder(None)?;
        builder.insert(constants::SEED_FILE, blob, 0o100644)?;
        let tree = self.inner.find_tree(builder.write()?)?;

        self.inner.commit(
            Some(&format!("refs/heads/{}", name)),
            &signature,
            &signature,
            constants::INITIAL_COMMIT,
            &tree,
            &[],
        )?;

        debug!(branch = name, "orphan branch created");
        Ok(())
    }

    /// Create branch `new` pointing at the tip of `from`.
    ///
    /// The new branch shares the source branch's entire history.
    pub fn create_branch(&self, from: &str, new: &str) -> Result<()> {
        let commit = self
            .inner
            .find_branch(from, BranchType::Local)?
            .get()
            .peel_to_commit()?;
        self.inner.branch(new, &commit, false)?;
        debug!(from, new, "branch copied");
        Ok(())
    }

    /// Delete the branch ref. Refuses the currently checked-out branch.
    pub fn remove_branch(&self, name: &str) -> Result<()> {
        let mut branch = self.inner.find_branch(name, BranchType::Local)?;
        branch.delete()?;
        debug!(branch = name, "branch removed");
        Ok(())
    }

    /// Place a lightweight tag named after the branch on its tip.
    pub fn tag_branch(&self, name: &str) -> Result<()> {
        let commit = self
            .inner
            .find_branch(name, BranchType::Local)?
            .get()
            .peel_to_commit()?;
        self.inner.tag_lightweight(name, commit.as_object(), false)?;
        debug!(tag = name, "branch tagged");
        Ok(())
    }

    /// Recreate branch `name` at the commit its tag points to.
    pub fn branch_from_tag(&self, name: &str) -> Result<()> {
        let target = self
            .inner
            .revparse_single(&format!("refs/tags/{}", name))?
            .peel_to_commit()?;
        self.inner.branch(name, &target, false)?;
        debug!(branch = name, "branch restored from tag");
        Ok(())
    }

    pub fn delete_tag(&self, name: &str) -> Result<()> {
        self.inner.tag_delete(name)?;
        debug!(tag = name, "tag deleted");
        Ok(())
    }

    /// Stage `stage` and commit it onto the current branch.
    pub fn commit(&self, identity: &Identity, stage: Stage<'_>, message: &str) -> Result<()> {
        let signature = signature(identity)?;

        let mut index = self.inner.index()?;
        match stage {
            Stage::Path(path) => index.add_path(path)?,
            Stage::All => {
                index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
                // add_all ignores deletions; update_all stages them.
                index.update_all(["*"], None)?;
            }
        }
        index.write()?;

        let tree = self.inner.find_tree(index.write_tree()?)?;
        let parent = self.inner.head()?.peel_to_commit()?;
        self.inner.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        debug!(message, "committed");
        Ok(())
    }

    /// Number of commits reachable from the branch tip.
    pub fn history_len(&self, branch: &str) -> Result<usize> {
        let mut walk = self.inner.revwalk()?;
        walk.push_ref(&format!("refs/heads/{}", branch))?;
        let mut count = 0;
        for oid in walk {
            oid?;
            count += 1;
        }
        Ok(count)
    }
}

fn signature(identity: &Identity) -> Result<git2::Signature<'static>> {
    Ok(git2::Signature::now(&identity.name, &identity.email)?)
}
