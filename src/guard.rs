//! Pre-flight check that keeps generation from clobbering existing work.
//!
//! The check and the later creation of the root are not atomic: another
//! process may create the root in between. Staged generation re-checks
//! right before moving the tree into place.

use log::debug;
use std::fs;
use std::path::Path;

/// Decision taken by [`check_root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCheck {
    /// Nothing exists at the target, generation may start
    Proceed,
    /// Something already exists at the target
    Abort,
}

/// Checks whether `base/root_name` is free.
///
/// Any kind of entry counts as taken: file, directory, or symlink,
/// including a dangling one.
pub fn check_root(base: &Path, root_name: &str) -> RootCheck {
    let target = base.join(root_name);
    if fs::symlink_metadata(&target).is_ok() {
        debug!("Target {} already exists", target.display());
        RootCheck::Abort
    } else {
        RootCheck::Proceed
    }
}
