//! # appx-runtime
//!
//! Host implementations of the `appx-core` ports.
//!
//! - [`OsFileSystem`] - existence checks against the real filesystem
//! - [`HostEnvironment`] - word size, `Program Files` locations and working directory
//! - [`EnvToolLocator`] - `APPX_MAKEAPPX_PATH` override, then `PATH`
//! - [`SystemRegistry`] - `HKEY_LOCAL_MACHINE` on Windows, always empty elsewhere
//! - [`CommandRunner`] - `std::process` execution with captured output
//! - [`config`] - configuration directory and `.env` persistence

#![deny(unsafe_code)]

pub mod config;
mod environment;
mod fs;
mod registry;
mod runner;
mod tool_locator;

#[cfg(test)]
mod test_utils;

pub use config::ConfigError;
pub use environment::HostEnvironment;
pub use fs::OsFileSystem;
pub use registry::SystemRegistry;
pub use runner::CommandRunner;
pub use tool_locator::EnvToolLocator;

use std::sync::Arc;

use appx_core::{AppPackagerRunner, PackagerResolver};

/// Compose a runner from the default host adapters.
pub fn host_runner() -> AppPackagerRunner {
    let file_system = Arc::new(OsFileSystem);
    let environment = Arc::new(HostEnvironment::detect());
    let resolver = PackagerResolver::new(
        file_system.clone(),
        environment.clone(),
        Arc::new(EnvToolLocator::default()),
        Arc::new(SystemRegistry),
    );
    AppPackagerRunner::new(
        Box::new(resolver),
        Arc::new(CommandRunner),
        file_system,
        environment,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use appx_core::{PackagerSettings, ToolPathSource};

    #[test]
    fn host_runner_checks_explicit_tool_path_on_disk() {
        let temp = tempfile::tempdir().unwrap();
        let tool = temp.path().join("makeappx.exe");
        std::fs::write(&tool, b"").unwrap();

        let runner = host_runner();
        let settings = PackagerSettings::new()
            .with_tool_path(&tool)
            .with_working_directory(temp.path());

        let resolution = runner.tool_path(&settings).unwrap();
        assert_eq!(resolution.location.as_path(), tool);
        assert_eq!(resolution.source, ToolPathSource::Settings);
        assert_eq!(runner.working_directory(&settings), temp.path());
    }
}
