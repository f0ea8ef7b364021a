//! Known-tool lookup port.
//!
//! The host may already know where a tool lives (an explicit override,
//! a registered tool, a `PATH` entry). The resolver consults this port
//! before probing SDK install locations.

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Host-provided lookup of tools by executable name.
#[cfg_attr(test, automock)]
pub trait ToolLocator: Send + Sync {
    /// Resolve `executable_name` (e.g. `makeappx.exe`) to a path, if the host knows one.
    fn resolve(&self, executable_name: &str) -> Option<PathBuf>;
}
