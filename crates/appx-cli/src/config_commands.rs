//! Configuration management subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Show the configuration file, tool override and effective settings
    Show,
    /// Persist an explicit MakeAppx.exe path to the configuration file
    SetToolPath {
        /// Path to makeappx.exe
        path: PathBuf,
        /// Save the path even if the file does not exist yet
        #[arg(long)]
        no_check: bool,
    },
    /// Remove the persisted MakeAppx.exe path
    ClearToolPath,
}
