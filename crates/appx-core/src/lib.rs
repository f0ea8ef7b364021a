//! # appx-core
//!
//! Core domain for locating and driving the Windows SDK app packager
//! (`MakeAppx.exe`).
//!
//! - [`resolver`] - layered tool resolution (override, SDK directories, registry) with a
//!   re-validated one-slot cache
//! - [`arguments`] - ordered, quote-aware command-line tokens
//! - [`invocation`] - operating modes, content sources and the generic argument builder
//! - [`tool`] - the runner plus the six per-mode wrappers (pack, unpack, bundle,
//!   unbundle, encrypt, decrypt)
//! - [`ports`] - trait abstractions for the filesystem, platform, registry, tool lookup
//!   and process execution
//!
//! Infrastructure implementations of the ports live in `appx-runtime`.

#![deny(unused_crate_dependencies)]

pub mod arguments;
pub mod error;
pub mod invocation;
pub mod paths;
pub mod ports;
pub mod resolver;
pub mod settings;
pub mod tool;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use arguments::{Argument, ProcessArguments};
pub use error::{PackagerError, PackagerResult};
pub use invocation::{ContentSource, InvocationPaths, OperatingMode, build_arguments};
pub use ports::{
    FileSystem, PlatformEnvironment, ProcessError, ProcessOptions, ProcessOutput, ProcessRunner,
    Registry, RegistryKey, SpecialPath, ToolLocator,
};
pub use resolver::{
    DISPLAY_NAME, EXECUTABLE_NAME, PackagerResolver, PackagerResolverBuilder, Resolution,
    ToolLocation, ToolPathSource, ToolResolver,
};
pub use settings::{HashAlgorithm, PackagerSettings};
pub use tool::{
    AppBundler, AppDecrypter, AppEncrypter, AppPackagerRunner, AppPacker, AppUnbundler,
    AppUnpacker, PreparedInvocation,
};

// Dev-dependencies only exercised by integration tests
#[cfg(test)]
use tempfile as _;
