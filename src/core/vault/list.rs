//! Listing stored secrets.
//!
//! Secret names are recovered from the branch list, so the listing is
//! always as fresh as the refs. Names are sorted before grouping to
//! keep sibling order in the rendered tree deterministic.

use tracing::debug;

use super::Vault;
use crate::core::path::SecretPath;
use crate::core::tree::NamespaceTree;
use crate::error::{Result, StoreError};

impl Vault {
    /// All stored secret paths, sorted.
    ///
    /// Branches without the artifact suffix (the baseline among them)
    /// are skipped.
    pub fn secret_paths(&self) -> Result<Vec<SecretPath>> {
        let mut paths: Vec<SecretPath> = self
            .repo
            .branch_names()?
            .iter()
            .filter_map(|name| SecretPath::from_branch(name))
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Group stored secrets into a namespace tree.
    ///
    /// With a `prefix`, only paths starting with it are included; a
    /// prefix matching nothing yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyStore` when the store holds no secrets
    /// at all.
    pub fn list(&self, prefix: Option<&str>) -> Result<NamespaceTree> {
        let paths = self.secret_paths()?;
        debug!(count = paths.len(), "listing secrets");

        if paths.is_empty() {
            return Err(StoreError::EmptyStore.into());
        }

        let mut tree = NamespaceTree::new();
        for path in &paths {
            if let Some(prefix) = prefix {
                if !path.as_str().starts_with(prefix) {
                    continue;
                }
            }
            tree.insert(path);
        }
        Ok(tree)
    }
}
