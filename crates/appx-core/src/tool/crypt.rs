//! Wrappers for package encryption and decryption.

use std::path::Path;

use super::AppPackagerRunner;
use crate::error::PackagerResult;
use crate::invocation::{InvocationPaths, OperatingMode};
use crate::ports::ProcessOutput;
use crate::settings::PackagerSettings;

/// Encrypts a package or bundle (`encrypt`).
///
/// Without a key file the packager's global test key is used.
#[derive(Debug, Clone, Copy)]
pub struct AppEncrypter<'a> {
    runner: &'a AppPackagerRunner,
}

impl<'a> AppEncrypter<'a> {
    pub(super) const fn new(runner: &'a AppPackagerRunner) -> Self {
        Self { runner }
    }

    pub fn encrypt(
        &self,
        input_package: impl AsRef<Path>,
        output_package: impl AsRef<Path>,
        key_file: Option<&Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let paths = crypt_paths(input_package.as_ref(), output_package.as_ref(), key_file);
        self.runner.run(OperatingMode::Encrypt, &paths, settings)
    }
}

/// Decrypts a package or bundle (`decrypt`).
#[derive(Debug, Clone, Copy)]
pub struct AppDecrypter<'a> {
    runner: &'a AppPackagerRunner,
}

impl<'a> AppDecrypter<'a> {
    pub(super) const fn new(runner: &'a AppPackagerRunner) -> Self {
        Self { runner }
    }

    pub fn decrypt(
        &self,
        input_package: impl AsRef<Path>,
        output_package: impl AsRef<Path>,
        key_file: Option<&Path>,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let paths = crypt_paths(input_package.as_ref(), output_package.as_ref(), key_file);
        self.runner.run(OperatingMode::Decrypt, &paths, settings)
    }
}

fn crypt_paths(input: &Path, output: &Path, key_file: Option<&Path>) -> InvocationPaths {
    InvocationPaths::crypt(input, output, key_file.map(Path::to_path_buf))
}
