//! Config command handler.
//!
//! Manages the persisted `MakeAppx.exe` override in the `.env` file.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use appx_core::PackagerSettings;
use appx_runtime::config::{
    TOOL_PATH_ENV, clear_tool_path, env_file_path, persist_tool_path, read_env_value,
};

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;

/// Execute the config command.
pub fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => handle_show(ctx),
        ConfigCommand::SetToolPath { path, no_check } => handle_set_tool_path(&path, no_check),
        ConfigCommand::ClearToolPath => handle_clear_tool_path(),
    }
}

fn handle_show(ctx: &CliContext) -> Result<()> {
    let view = ConfigView {
        env_file: env_file_path().map_err(CliError::from)?,
        persisted_tool_path: read_env_value(TOOL_PATH_ENV).map_err(CliError::from)?,
        active_tool_path: std::env::var(TOOL_PATH_ENV).ok(),
        settings: ctx.settings(),
    };
    let stdout = std::io::stdout();
    view.write_to(&mut stdout.lock())
}

fn handle_set_tool_path(path: &Path, no_check: bool) -> Result<()> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;

    if !no_check && !absolute.is_file() {
        return Err(CliError::Arguments(format!(
            "{} does not exist (use --no-check to save it anyway)",
            absolute.display()
        ))
        .into());
    }

    persist_tool_path(&absolute).map_err(CliError::from)?;
    println!("✓ Tool path set to: {}", absolute.display());
    Ok(())
}

fn handle_clear_tool_path() -> Result<()> {
    if clear_tool_path().map_err(CliError::from)? {
        println!("✓ Tool path cleared.");
    } else {
        println!("No tool path was configured.");
    }
    Ok(())
}

/// Snapshot printed by `config show`.
struct ConfigView {
    env_file: PathBuf,
    persisted_tool_path: Option<String>,
    active_tool_path: Option<String>,
    settings: PackagerSettings,
}

impl ConfigView {
    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Config file: {}", self.env_file.display())?;
        writeln!(
            out,
            "Saved tool path ({TOOL_PATH_ENV}): {}",
            self.persisted_tool_path.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(
            out,
            "Active tool path ({TOOL_PATH_ENV}): {}",
            self.active_tool_path.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(out, "Settings:")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&self.settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_lists_file_override_and_settings() {
        let view = ConfigView {
            env_file: PathBuf::from("/config/appx-packager/.env"),
            persisted_tool_path: Some("/opt/makeappx.exe".to_string()),
            active_tool_path: None,
            settings: PackagerSettings::new().with_localized(true),
        };

        let mut out = Vec::new();
        view.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Config file: /config/appx-packager/.env"));
        assert!(text.contains("Saved tool path (APPX_MAKEAPPX_PATH): /opt/makeappx.exe"));
        assert!(text.contains("Active tool path (APPX_MAKEAPPX_PATH): (not set)"));
        assert!(text.contains("\"localized\": true"));
    }

    #[test]
    fn missing_tool_path_is_rejected_without_no_check() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("makeappx.exe");

        let err = handle_set_tool_path(&missing, false).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 2);
    }
}
