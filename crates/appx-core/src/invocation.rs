//! Operating modes and the generic argument builder.
//!
//! Every packager invocation has the same shape: a verb, the primary and
//! secondary path flags for that verb, optional mode-specific extras and
//! finally the settings switches. The six per-mode wrappers in
//! [`crate::tool`] are thin callers of [`build_arguments`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::arguments::ProcessArguments;
use crate::error::{PackagerError, PackagerResult};
use crate::paths::{make_absolute, require_path};
use crate::settings::PackagerSettings;

/// The packager verb to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    Pack,
    Unpack,
    Bundle,
    Unbundle,
    Encrypt,
    Decrypt,
}

impl OperatingMode {
    /// Every mode, in verb order.
    pub const ALL: [Self; 6] = [
        Self::Pack,
        Self::Unpack,
        Self::Bundle,
        Self::Unbundle,
        Self::Encrypt,
        Self::Decrypt,
    ];

    /// The verb token that starts the command line.
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Pack => "pack",
            Self::Unpack => "unpack",
            Self::Bundle => "bundle",
            Self::Unbundle => "unbundle",
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }

    /// Name of the path passed with `/p`, used in validation errors.
    const fn primary_parameter(self) -> &'static str {
        match self {
            Self::Pack => "output_package",
            Self::Bundle => "output_bundle",
            Self::Unpack | Self::Encrypt | Self::Decrypt => "input_package",
            Self::Unbundle => "input_bundle",
        }
    }

    /// Whether `/h` may be passed for this mode.
    const fn accepts_hash_algorithm(self) -> bool {
        matches!(self, Self::Pack | Self::Bundle)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl FromStr for OperatingMode {
    type Err = PackagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.verb().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                PackagerError::invalid("mode", format!("unknown operating mode '{wanted}'"))
            })
    }
}

/// What a pack or bundle invocation reads its payload from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A directory whose contents become the payload (`/d`).
    Directory(PathBuf),
    /// A mapping file listing source and package paths (`/f`).
    MappingFile(PathBuf),
}

impl ContentSource {
    /// Build a content source from two optional inputs, exactly one of
    /// which must be present.
    pub fn from_parts(
        content_directory: Option<PathBuf>,
        mapping_file: Option<PathBuf>,
    ) -> PackagerResult<Self> {
        match (content_directory, mapping_file) {
            (Some(directory), None) => Ok(Self::Directory(directory)),
            (None, Some(file)) => Ok(Self::MappingFile(file)),
            (Some(_), Some(_)) => Err(PackagerError::invalid(
                "mapping_file",
                "a content directory and a mapping file cannot both be given",
            )),
            (None, None) => Err(PackagerError::invalid(
                "content_directory",
                "either a content directory or a mapping file is required",
            )),
        }
    }

    /// The flag that introduces this source.
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::Directory(_) => "/d",
            Self::MappingFile(_) => "/f",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::MappingFile(path) => path,
        }
    }

    const fn parameter(&self) -> &'static str {
        match self {
            Self::Directory(_) => "content_directory",
            Self::MappingFile(_) => "mapping_file",
        }
    }
}

/// The paths an invocation operates on, shaped by mode family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationPaths {
    /// `pack` and `bundle`: write `output` from `content`.
    Create {
        output: PathBuf,
        content: ContentSource,
    },
    /// `unpack` and `unbundle`: extract `input` into `output_directory`.
    Extract {
        input: PathBuf,
        output_directory: PathBuf,
    },
    /// `encrypt` and `decrypt`: transform `input` into `output`.
    ///
    /// Without a key file the global test key is used (`/kt`).
    Crypt {
        input: PathBuf,
        output: PathBuf,
        key_file: Option<PathBuf>,
    },
}

impl InvocationPaths {
    pub fn create(output: impl Into<PathBuf>, content: ContentSource) -> Self {
        Self::Create {
            output: output.into(),
            content,
        }
    }

    pub fn extract(input: impl Into<PathBuf>, output_directory: impl Into<PathBuf>) -> Self {
        Self::Extract {
            input: input.into(),
            output_directory: output_directory.into(),
        }
    }

    pub fn crypt(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        key_file: Option<PathBuf>,
    ) -> Self {
        Self::Crypt {
            input: input.into(),
            output: output.into(),
            key_file,
        }
    }

    const fn shape(&self) -> &'static str {
        match self {
            Self::Create { .. } => "output and content source",
            Self::Extract { .. } => "input and output directory",
            Self::Crypt { .. } => "input, output and key file",
        }
    }
}

/// Build the ordered command-line arguments for one invocation.
///
/// Every required input is validated before any token is produced. Relative
/// paths are made absolute against `working_directory`; nothing here touches
/// the filesystem or spawns a process.
///
/// # Errors
///
/// Returns [`PackagerError::InvalidArgument`] naming the first missing
/// input, or naming `mode` when `paths` does not fit the mode.
pub fn build_arguments(
    mode: OperatingMode,
    paths: &InvocationPaths,
    settings: &PackagerSettings,
    working_directory: &Path,
) -> PackagerResult<ProcessArguments> {
    let absolute = |path: &Path| make_absolute(path, working_directory);
    let mut args = ProcessArguments::new();

    match (mode, paths) {
        (OperatingMode::Pack | OperatingMode::Bundle, InvocationPaths::Create { output, content }) => {
            let output = require_path(mode.primary_parameter(), output)?;
            let content_path = require_path(content.parameter(), content.path())?;

            args.append(mode.verb())
                .append_path("/p", &absolute(output))
                .append_path(content.flag(), &absolute(content_path));

            if let Some(algorithm) = settings.hash_algorithm {
                if mode.accepts_hash_algorithm() {
                    args.append("/h").append(algorithm.as_str());
                }
            }
        }
        (
            OperatingMode::Unpack | OperatingMode::Unbundle,
            InvocationPaths::Extract {
                input,
                output_directory,
            },
        ) => {
            let input = require_path(mode.primary_parameter(), input)?;
            let output_directory = require_path("output_directory", output_directory)?;

            args.append(mode.verb())
                .append_path("/p", &absolute(input))
                .append_path("/d", &absolute(output_directory));
        }
        (
            OperatingMode::Encrypt | OperatingMode::Decrypt,
            InvocationPaths::Crypt {
                input,
                output,
                key_file,
            },
        ) => {
            let input = require_path(mode.primary_parameter(), input)?;
            let output = require_path("output_package", output)?;
            let key_file = key_file
                .as_deref()
                .map(|key| require_path("key_file", key))
                .transpose()?;

            args.append(mode.verb())
                .append_path("/p", &absolute(input))
                .append_path("/ep", &absolute(output));

            match key_file {
                Some(key) => args.append_path("/kf", &absolute(key)),
                None => args.append("/kt"),
            };
        }
        (mode, paths) => {
            return Err(PackagerError::invalid(
                "mode",
                format!("'{mode}' cannot be invoked with {}", paths.shape()),
            ));
        }
    }

    settings.append_switches(&mut args);
    Ok(args)
}
