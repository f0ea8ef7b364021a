//! Wrappers for the modes that create a package or bundle.

use std::path::Path;

use super::AppPackagerRunner;
use crate::error::PackagerResult;
use crate::invocation::{ContentSource, InvocationPaths, OperatingMode};
use crate::ports::ProcessOutput;
use crate::settings::PackagerSettings;

/// Creates an app package (`pack`).
#[derive(Debug, Clone, Copy)]
pub struct AppPacker<'a> {
    runner: &'a AppPackagerRunner,
}

impl<'a> AppPacker<'a> {
    pub(super) const fn new(runner: &'a AppPackagerRunner) -> Self {
        Self { runner }
    }

    /// Pack `content` into `output_package`.
    pub fn pack(
        &self,
        output_package: impl AsRef<Path>,
        content: ContentSource,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let paths = InvocationPaths::create(output_package.as_ref(), content);
        self.runner.run(OperatingMode::Pack, &paths, settings)
    }

    /// Pack every file below `content_directory`.
    pub fn pack_directory(
        &self,
        output_package: impl AsRef<Path>,
        content_directory: impl AsRef<Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let content = ContentSource::Directory(content_directory.as_ref().to_path_buf());
        self.pack(output_package, content, settings)
    }

    /// Pack the files listed in `mapping_file`.
    pub fn pack_mapping_file(
        &self,
        output_package: impl AsRef<Path>,
        mapping_file: impl AsRef<Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let content = ContentSource::MappingFile(mapping_file.as_ref().to_path_buf());
        self.pack(output_package, content, settings)
    }
}

/// Creates an app bundle (`bundle`).
#[derive(Debug, Clone, Copy)]
pub struct AppBundler<'a> {
    runner: &'a AppPackagerRunner,
}

impl<'a> AppBundler<'a> {
    pub(super) const fn new(runner: &'a AppPackagerRunner) -> Self {
        Self { runner }
    }

    /// Bundle `content` into `output_bundle`.
    pub fn bundle(
        &self,
        output_bundle: impl AsRef<Path>,
        content: ContentSource,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let paths = InvocationPaths::create(output_bundle.as_ref(), content);
        self.runner.run(OperatingMode::Bundle, &paths, settings)
    }

    /// Bundle every package below `content_directory`.
    pub fn bundle_directory(
        &self,
        output_bundle: impl AsRef<Path>,
        content_directory: impl AsRef<Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let content = ContentSource::Directory(content_directory.as_ref().to_path_buf());
        self.bundle(output_bundle, content, settings)
    }

    /// Bundle the packages listed in `mapping_file`.
    pub fn bundle_mapping_file(
        &self,
        output_bundle: impl AsRef<Path>,
        mapping_file: impl AsRef<Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let content = ContentSource::MappingFile(mapping_file.as_ref().to_path_buf());
        self.bundle(output_bundle, content, settings)
    }
}
