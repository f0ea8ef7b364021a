//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the host.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `winreg`, `which` or `std::process` types in any signature
//! - Every probe is a blocking, local query that is expected to return quickly
//! - Registry keys are scoped resources: dropping a key releases its handle

pub mod environment;
pub mod file_system;
pub mod process_runner;
pub mod registry;
pub mod tool_locator;

pub use environment::{PlatformEnvironment, SpecialPath};
pub use file_system::FileSystem;
pub use process_runner::{ProcessError, ProcessOptions, ProcessOutput, ProcessRunner};
pub use registry::{Registry, RegistryKey};
pub use tool_locator::ToolLocator;

#[cfg(test)]
pub use file_system::MockFileSystem;
#[cfg(test)]
pub use tool_locator::MockToolLocator;
