//! Main commands enum and shared argument groups.

use std::path::PathBuf;

use appx_core::{ContentSource, HashAlgorithm, PackagerResult, PackagerSettings};
use clap::{Args, Subcommand};

use crate::config_commands::ConfigCommand;

/// Switches forwarded to the packager.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchArgs {
    /// Skip validation of localized packages (/l)
    #[arg(long)]
    pub localized: bool,

    /// Overwrite the output without prompting (/o)
    #[arg(long, conflicts_with = "no_overwrite")]
    pub overwrite: bool,

    /// Never overwrite an existing output (/no)
    #[arg(long = "no-overwrite")]
    pub no_overwrite: bool,

    /// Skip semantic validation of the manifest (/nv)
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,

    /// Ask the packager for verbose output (/v)
    #[arg(long = "tool-verbose")]
    pub tool_verbose: bool,
}

impl SwitchArgs {
    /// Apply these switches on top of `settings`.
    #[must_use]
    pub fn apply(&self, settings: PackagerSettings) -> PackagerSettings {
        settings
            .with_localized(self.localized)
            .with_overwrite_output(self.overwrite)
            .with_prevent_overwrite_output(self.no_overwrite)
            .with_skip_semantic_validation(self.skip_validation)
            .with_verbose_logging(self.tool_verbose)
    }
}

/// Where pack and bundle read their payload from. Exactly one is required.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct ContentArgs {
    /// Directory whose contents become the payload (/d)
    #[arg(short = 'd', long = "content-dir", value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Mapping file listing the payload files (/f)
    #[arg(short = 'f', long = "mapping-file", value_name = "FILE")]
    pub mapping_file: Option<PathBuf>,
}

impl ContentArgs {
    pub fn into_source(self) -> PackagerResult<ContentSource> {
        ContentSource::from_parts(self.content_dir, self.mapping_file)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an app package
    Pack {
        /// Package to create (/p)
        #[arg(short = 'p', long = "output", value_name = "PACKAGE")]
        output: PathBuf,
        #[command(flatten)]
        content: ContentArgs,
        /// Block map hash algorithm: SHA256, SHA384 or SHA512 (/h)
        #[arg(long = "hash-algorithm", value_name = "ALG")]
        hash_algorithm: Option<HashAlgorithm>,
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Extract an app package
    Unpack {
        /// Package to extract (/p)
        #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
        input: PathBuf,
        /// Directory to extract into (/d)
        #[arg(short = 'd', long = "output-dir", value_name = "DIR")]
        output_directory: PathBuf,
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Create an app bundle
    Bundle {
        /// Bundle to create (/p)
        #[arg(short = 'p', long = "output", value_name = "BUNDLE")]
        output: PathBuf,
        #[command(flatten)]
        content: ContentArgs,
        /// Block map hash algorithm: SHA256, SHA384 or SHA512 (/h)
        #[arg(long = "hash-algorithm", value_name = "ALG")]
        hash_algorithm: Option<HashAlgorithm>,
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Extract an app bundle
    Unbundle {
        /// Bundle to extract (/p)
        #[arg(short = 'p', long = "bundle", value_name = "BUNDLE")]
        input: PathBuf,
        /// Directory to extract into (/d)
        #[arg(short = 'd', long = "output-dir", value_name = "DIR")]
        output_directory: PathBuf,
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Encrypt a package or bundle
    Encrypt {
        /// Package to encrypt (/p)
        #[arg(short = 'p', long = "input", value_name = "PACKAGE")]
        input: PathBuf,
        /// Encrypted package to write (/ep)
        #[arg(short = 'e', long = "output", value_name = "PACKAGE")]
        output: PathBuf,
        /// Key file (/kf); the global test key is used when omitted (/kt)
        #[arg(short = 'k', long = "key-file", value_name = "FILE")]
        key_file: Option<PathBuf>,
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Decrypt a package or bundle
    Decrypt {
        /// Package to decrypt (/p)
        #[arg(short = 'p', long = "input", value_name = "PACKAGE")]
        input: PathBuf,
        /// Decrypted package to write (/ep)
        #[arg(short = 'e', long = "output", value_name = "PACKAGE")]
        output: PathBuf,
        /// Key file (/kf); the global test key is used when omitted (/kt)
        #[arg(short = 'k', long = "key-file", value_name = "FILE")]
        key_file: Option<PathBuf>,
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Show which MakeAppx.exe would be used and where it was found
    Locate,

    /// Manage persisted configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}
