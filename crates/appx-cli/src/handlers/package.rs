//! Handlers for the six packager modes.
//!
//! Each subcommand is turned into a [`PackageRequest`] and run through the
//! shared runner, or printed when `--dry-run` is set.

use std::io::Write;

use anyhow::Result;
use appx_core::{AppPackagerRunner, InvocationPaths, OperatingMode, PackagerSettings};

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::CliError;

/// A fully specified packager invocation from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub mode: OperatingMode,
    pub paths: InvocationPaths,
    pub settings: PackagerSettings,
}

impl PackageRequest {
    /// Translate a packager subcommand.
    ///
    /// Returns `Ok(None)` for commands that do not run the packager.
    pub fn from_command(
        command: Commands,
        base: PackagerSettings,
    ) -> Result<Option<Self>, CliError> {
        let request = match command {
            Commands::Pack {
                output,
                content,
                hash_algorithm,
                switches,
            } => Self {
                mode: OperatingMode::Pack,
                paths: InvocationPaths::create(output, content.into_source()?),
                settings: with_hash(switches.apply(base), hash_algorithm),
            },
            Commands::Bundle {
                output,
                content,
                hash_algorithm,
                switches,
            } => Self {
                mode: OperatingMode::Bundle,
                paths: InvocationPaths::create(output, content.into_source()?),
                settings: with_hash(switches.apply(base), hash_algorithm),
            },
            Commands::Unpack {
                input,
                output_directory,
                switches,
            } => Self {
                mode: OperatingMode::Unpack,
                paths: InvocationPaths::extract(input, output_directory),
                settings: switches.apply(base),
            },
            Commands::Unbundle {
                input,
                output_directory,
                switches,
            } => Self {
                mode: OperatingMode::Unbundle,
                paths: InvocationPaths::extract(input, output_directory),
                settings: switches.apply(base),
            },
            Commands::Encrypt {
                input,
                output,
                key_file,
                switches,
            } => Self {
                mode: OperatingMode::Encrypt,
                paths: InvocationPaths::crypt(input, output, key_file),
                settings: switches.apply(base),
            },
            Commands::Decrypt {
                input,
                output,
                key_file,
                switches,
            } => Self {
                mode: OperatingMode::Decrypt,
                paths: InvocationPaths::crypt(input, output, key_file),
                settings: switches.apply(base),
            },
            Commands::Locate | Commands::Config { .. } => return Ok(None),
        };
        Ok(Some(request))
    }
}

fn with_hash(
    settings: PackagerSettings,
    algorithm: Option<appx_core::HashAlgorithm>,
) -> PackagerSettings {
    match algorithm {
        Some(algorithm) => settings.with_hash_algorithm(algorithm),
        None => settings,
    }
}

/// Execute a packager request.
pub fn execute(ctx: &CliContext, request: &PackageRequest) -> Result<()> {
    let stdout = std::io::stdout();
    run_request(ctx.runner(), request, ctx.dry_run, &mut stdout.lock())
}

/// Run (or print, for a dry run) one request, writing the packager's
/// output to `out`.
pub fn run_request(
    runner: &AppPackagerRunner,
    request: &PackageRequest,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let invocation = runner
        .prepare(request.mode, &request.paths, &request.settings)
        .map_err(CliError::from)?;

    if dry_run {
        writeln!(out, "{}", invocation.command_line())?;
        return Ok(());
    }

    let output = runner.execute(&invocation).map_err(CliError::from)?;
    if !output.stdout.trim().is_empty() {
        write!(out, "{}", output.stdout)?;
    }
    writeln!(out, "✓ {} completed", request.mode)?;
    Ok(())
}
