//! Invocation settings shared by every operating mode.
//!
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::arguments::ProcessArguments;
use crate::error::PackagerError;

/// Hashing algorithm used when the packager creates the block map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 (the packager's default)
    #[serde(rename = "SHA256")]
    Sha256,
    /// SHA-384
    #[serde(rename = "SHA384")]
    Sha384,
    /// SHA-512
    #[serde(rename = "SHA512")]
    Sha512,
}

impl HashAlgorithm {
    /// The token the packager expects after `/h`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = PackagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "").as_str() {
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            other => Err(PackagerError::invalid(
                "hash_algorithm",
                format!("unsupported hash algorithm '{other}' (expected SHA256, SHA384 or SHA512)"),
            )),
        }
    }
}

/// Settings applied to a single packager invocation.
///
/// Each boolean independently toggles one switch. Switches are always
/// emitted in the same order (`/l`, `/o`, `/no`, `/nv`, `/v`) regardless of
/// the order they were set in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackagerSettings {
    /// Skip validation of localized packages (`/l`).
    pub localized: bool,

    /// Overwrite the output without prompting (`/o`).
    pub overwrite_output: bool,

    /// Never overwrite the output (`/no`).
    pub prevent_overwrite_output: bool,

    /// Skip semantic validation of the manifest (`/nv`).
    pub skip_semantic_validation: bool,

    /// Enable verbose output from the packager (`/v`).
    pub verbose_logging: bool,

    /// Block map hash algorithm (`/h`), pack and bundle only.
    pub hash_algorithm: Option<HashAlgorithm>,

    /// Explicit packager executable; bypasses resolution when set.
    pub tool_path: Option<PathBuf>,

    /// Directory relative paths are resolved against and the packager runs in.
    pub working_directory: Option<PathBuf>,
}

impl PackagerSettings {
    /// Create settings with every switch disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the localized switch.
    #[must_use]
    pub const fn with_localized(mut self, enabled: bool) -> Self {
        self.localized = enabled;
        self
    }

    /// Set the overwrite-output switch.
    #[must_use]
    pub const fn with_overwrite_output(mut self, enabled: bool) -> Self {
        self.overwrite_output = enabled;
        self
    }

    /// Set the prevent-overwrite-output switch.
    #[must_use]
    pub const fn with_prevent_overwrite_output(mut self, enabled: bool) -> Self {
        self.prevent_overwrite_output = enabled;
        self
    }

    /// Set the skip-semantic-validation switch.
    #[must_use]
    pub const fn with_skip_semantic_validation(mut self, enabled: bool) -> Self {
        self.skip_semantic_validation = enabled;
        self
    }

    /// Set the verbose-logging switch.
    #[must_use]
    pub const fn with_verbose_logging(mut self, enabled: bool) -> Self {
        self.verbose_logging = enabled;
        self
    }

    /// Set the block map hash algorithm.
    #[must_use]
    pub const fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = Some(algorithm);
        self
    }

    /// Use an explicit packager executable.
    #[must_use]
    pub fn with_tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(path.into());
        self
    }

    /// Set the working directory.
    #[must_use]
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Append the switches enabled by these settings, in their fixed order.
    pub(crate) fn append_switches(&self, args: &mut ProcessArguments) {
        args.append_switch(self.localized, "l")
            .append_switch(self.overwrite_output, "o")
            .append_switch(self.prevent_overwrite_output, "no")
            .append_switch(self.skip_semantic_validation, "nv")
            .append_switch(self.verbose_logging, "v");
    }
}
