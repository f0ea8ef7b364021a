//! Platform environment port.
//!
//! Describes the host the packager runs on: its word size, the special
//! directories the Windows SDK installs under, and the working directory
//! relative paths are resolved against.

use std::path::PathBuf;

/// Well-known directories exposed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialPath {
    /// `%ProgramFiles%`
    ProgramFiles,
    /// `%ProgramFiles(x86)%`
    ProgramFilesX86,
}

/// Platform descriptor consumed by the resolver and the argument builder.
pub trait PlatformEnvironment: Send + Sync {
    /// Whether the operating system is 64-bit.
    fn is_64bit(&self) -> bool;

    /// Location of a special directory.
    fn special_path(&self, kind: SpecialPath) -> PathBuf;

    /// Base directory for making relative paths absolute.
    fn working_directory(&self) -> PathBuf;
}
