//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - `.env` overrides (via appx-runtime config)
//! - Host adapters and the packager runner (via appx-runtime)
//! - Base invocation settings from global flags

use std::path::PathBuf;

use appx_core::{AppPackagerRunner, PackagerSettings};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI, taken from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Explicit packager executable for this invocation.
    pub tool_path: Option<PathBuf>,
    /// Working directory for relative paths and the packager process.
    pub working_dir: Option<PathBuf>,
    /// Print command lines instead of running them.
    pub dry_run: bool,
    /// Debug-level logging.
    pub verbose: bool,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            tool_path: cli.tool_path.clone(),
            working_dir: cli.working_dir.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }
    }

    /// Settings every command starts from.
    pub fn base_settings(&self) -> PackagerSettings {
        let mut settings = PackagerSettings::new();
        settings.tool_path.clone_from(&self.tool_path);
        settings.working_directory.clone_from(&self.working_dir);
        settings
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The packager runner over host adapters.
    pub runner: AppPackagerRunner,
    /// Settings derived from global flags.
    pub settings: PackagerSettings,
    /// Print command lines instead of running them.
    pub dry_run: bool,
}

impl CliContext {
    pub const fn runner(&self) -> &AppPackagerRunner {
        &self.runner
    }

    /// Base settings with per-command adjustments still to be applied.
    pub fn settings(&self) -> PackagerSettings {
        self.settings.clone()
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Bootstrap the CLI application.
///
/// Loads persisted overrides into the environment before composing the
/// runner, so the tool locator sees them.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    match appx_runtime::config::load_env_file() {
        Ok(Some(path)) => debug!(path = %path.display(), "Loaded configuration overrides"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Ignoring unreadable configuration file"),
    }

    CliContext {
        runner: appx_runtime::host_runner(),
        settings: config.base_settings(),
        dry_run: config.dry_run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn global_flags_become_base_settings() {
        let cli = Cli::parse_from([
            "appx",
            "--tool-path",
            "/opt/makeappx.exe",
            "--working-dir",
            "/work",
            "locate",
        ]);
        let config = CliConfig::from_cli(&cli);
        let settings = config.base_settings();

        assert_eq!(settings.tool_path, Some(PathBuf::from("/opt/makeappx.exe")));
        assert_eq!(settings.working_directory, Some(PathBuf::from("/work")));
        assert!(!settings.overwrite_output);
    }
}
