//! Wrappers for the modes that extract a package or bundle.

use std::path::Path;

use super::AppPackagerRunner;
use crate::error::PackagerResult;
use crate::invocation::{InvocationPaths, OperatingMode};
use crate::ports::ProcessOutput;
use crate::settings::PackagerSettings;

/// Extracts an app package (`unpack`).
#[derive(Debug, Clone, Copy)]
pub struct AppUnpacker<'a> {
    runner: &'a AppPackagerRunner,
}

impl<'a> AppUnpacker<'a> {
    pub(super) const fn new(runner: &'a AppPackagerRunner) -> Self {
        Self { runner }
    }

    pub fn unpack(
        &self,
        input_package: impl AsRef<Path>,
        output_directory: impl AsRef<Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let paths = InvocationPaths::extract(input_package.as_ref(), output_directory.as_ref());
        self.runner.run(OperatingMode::Unpack, &paths, settings)
    }
}

/// Extracts an app bundle (`unbundle`).
#[derive(Debug, Clone, Copy)]
pub struct AppUnbundler<'a> {
    runner: &'a AppPackagerRunner,
}

impl<'a> AppUnbundler<'a> {
    pub(super) const fn new(runner: &'a AppPackagerRunner) -> Self {
        Self { runner }
    }

    pub fn unbundle(
        &self,
        input_bundle: impl AsRef<Path>,
        output_directory: impl AsRef<Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let paths = InvocationPaths::extract(input_bundle.as_ref(), output_directory.as_ref());
        self.runner.run(OperatingMode::Unbundle, &paths, settings)
    }
}
