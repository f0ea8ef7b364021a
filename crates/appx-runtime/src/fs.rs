//! Filesystem adapter.

use std::path::Path;

use appx_core::FileSystem;

/// Existence checks against the host filesystem.
///
/// Only regular files count: a directory named `makeappx.exe` is not a tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
