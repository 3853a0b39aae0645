//! Working-tree file helpers.
//!
//! Artifact files live inside the store repository's working tree.
//! Writes restrict permissions (0600 files, 0700 directories) and moves
//! clean up the directory skeleton a nested path leaves behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;

/// Create `dir` and any missing parents, owner-only on Unix.
pub fn create_private_dirs(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)
}

/// Write a new file that must not already exist.
///
/// Parent directories are created as needed. The file ends up
/// owner-readable only on Unix.
pub fn write_new(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_private_dirs(parent)?;
        }
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(bytes)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Move a file, creating the destination's parent directories first.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_private_dirs(parent)?;
        }
    }
    fs::rename(from, to)?;
    Ok(())
}

/// Remove directories left empty after `rel` was deleted from under `root`.
///
/// Walks from the deepest parent of `rel` up towards `root`, removing
/// each directory that contains nothing, and stops at the first one
/// that does not. `root` itself is never removed.
pub fn prune_empty_dirs(root: &Path, rel: &Path) -> Result<()> {
    let mut current = rel.parent();
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() {
            break;
        }
        let abs = root.join(dir);
        match fs::read_dir(&abs) {
            Ok(mut entries) => {
                if entries.next().is_some() {
                    break;
                }
                fs::remove_dir(&abs)?;
            }
            // Already gone; the parent may still be prunable.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        current = dir.parent();
    }
    Ok(())
}
