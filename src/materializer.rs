//! Reproduces a template tree as directories and files on disk.
//!
//! Errors are plain `std::io::Error`s, returned to the caller untouched.

use crate::constants::STAGING_PREFIX;
use crate::template::{Entry, Node, TargetRoot};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Materializes `node` at `base/name`.
///
/// Directories are created with their missing parents and existing ones are
/// reused. Files are created or truncated and receive their content as-is.
/// Children are visited in declaration order.
///
/// # Errors
/// Any I/O failure aborts the walk, possibly leaving already written
/// siblings on disk.
pub fn materialize(base: &Path, name: &str, node: &Node) -> io::Result<()> {
    let path = base.join(name);
    match node {
        Node::Directory(children) => {
            debug!("Creating directory: {}", path.display());
            fs::create_dir_all(&path)?;
            for (child_name, child) in children {
                materialize(&path, child_name, child)?;
            }
        }
        Node::File(content) => {
            debug!("Writing file: {}", path.display());
            fs::write(&path, content)?;
        }
    }
    Ok(())
}

/// Materializes `node` inside a private staging directory under `base`, then
/// renames the finished tree to `base/name`.
///
/// On failure the staging directory is removed, so `base/name` is either
/// complete or absent.
///
/// # Errors
/// * `AlreadyExists` if `base/name` appeared while the tree was being staged
/// * Any I/O failure while staging or renaming
pub fn materialize_staged(base: &Path, name: &str, node: &Node) -> io::Result<()> {
    fs::create_dir_all(base)?;
    let staging = tempfile::Builder::new().prefix(STAGING_PREFIX).tempdir_in(base)?;
    debug!("Staging in {}", staging.path().display());

    materialize(staging.path(), name, node)?;

    let target = base.join(name);
    if fs::symlink_metadata(&target).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("'{}' appeared during generation", target.display()),
        ));
    }

    fs::rename(staging.path().join(name), &target)?;
    debug!("Moved staged tree to {}", target.display());
    remove_staging(staging);
    Ok(())
}

/// Removes the emptied staging directory. The tree is already in place at
/// this point, so a failure is only reported.
fn remove_staging(staging: TempDir) {
    let path = staging.path().to_path_buf();
    if let Err(e) = staging.close() {
        warn!("Could not remove staging directory {}: {}", path.display(), e);
    }
}

/// Lists what [`materialize`] would create for `root`, without writing.
pub fn plan(root: &TargetRoot) -> Vec<Entry> {
    root.entries()
}
