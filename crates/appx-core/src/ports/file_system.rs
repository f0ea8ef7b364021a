//! Filesystem port.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Read-only view of the host filesystem used for existence checks.
///
/// Resolution never reads file contents; it only needs to know whether a
/// candidate executable is present at the moment it is probed.
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` refers to an existing file.
    fn exists(&self, path: &Path) -> bool;
}
