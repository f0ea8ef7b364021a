//! Configuration directory and `.env` overrides.
//!
//! User overrides live in `<config dir>/appx-packager/.env` as `KEY=value`
//! lines. They are loaded into the process environment at startup without
//! replacing variables that are already set.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Explicit packager executable consumed by [`crate::EnvToolLocator`].
pub const TOOL_PATH_ENV: &str = "APPX_MAKEAPPX_PATH";

/// Overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "APPX_CONFIG_DIR";

const APP_DIR_NAME: &str = "appx-packager";

/// Errors raised while reading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a configuration directory; set {CONFIG_DIR_ENV}")]
    NoConfigDir,

    #[error("Failed to access env file {}: {reason}", .path.display())]
    EnvFile { path: PathBuf, reason: String },
}

/// Directory holding the `.env` file.
///
/// Resolution order:
/// 1. `APPX_CONFIG_DIR`
/// 2. The platform configuration directory joined with `appx-packager`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Location of the `.env` file that stores user overrides.
pub fn env_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(".env"))
}

/// Load the `.env` file into the process environment, if it exists.
///
/// Returns the path that was loaded.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    let path = env_file_path()?;
    if !path.is_file() {
        debug!(path = %path.display(), "No env file to load");
        return Ok(None);
    }
    dotenvy::from_path(&path).map_err(|e| env_file_error(&path, &e))?;
    debug!(path = %path.display(), "Loaded env file");
    Ok(Some(path))
}

/// Read a value from the `.env` file without touching the environment.
pub fn read_env_value(key: &str) -> Result<Option<String>, ConfigError> {
    let path = env_file_path()?;
    if !path.is_file() {
        return Ok(None);
    }
    let entries = dotenvy::from_path_iter(&path).map_err(|e| env_file_error(&path, &e))?;
    for entry in entries {
        let (name, value) = entry.map_err(|e| env_file_error(&path, &e))?;
        if name == key {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Persist a `key=value` pair into the `.env` file.
///
/// An existing entry is replaced in place; otherwise the pair is appended.
pub fn persist_env_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let path = env_file_path()?;
    let mut lines = read_lines(&path)?;

    let entry = format!("{key}={}", quote_value(value));
    let mut updated = false;
    lines.retain_mut(|line| {
        if !is_entry_for(line, key) {
            return true;
        }
        if updated {
            return false;
        }
        line.clone_from(&entry);
        updated = true;
        true
    });
    if !updated {
        lines.push(entry);
    }

    write_lines(&path, &lines)
}

/// Remove every entry for `key`. Returns whether anything was removed.
pub fn remove_env_value(key: &str) -> Result<bool, ConfigError> {
    let path = env_file_path()?;
    if !path.is_file() {
        return Ok(false);
    }
    let mut lines = read_lines(&path)?;
    let before = lines.len();
    lines.retain(|line| !is_entry_for(line, key));
    if lines.len() == before {
        return Ok(false);
    }
    write_lines(&path, &lines)?;
    Ok(true)
}

/// Persist the packager executable override.
pub fn persist_tool_path(path: &Path) -> Result<(), ConfigError> {
    persist_env_value(TOOL_PATH_ENV, &path.to_string_lossy())
}

/// Remove the persisted packager executable override.
pub fn clear_tool_path() -> Result<bool, ConfigError> {
    remove_env_value(TOOL_PATH_ENV)
}

/// Single-quote values the env parser would otherwise reinterpret, such as
/// Windows paths with backslashes or spaces.
///
/// Values containing `'` are double-quoted instead, with `\`, `"` and `$`
/// escaped so no variable substitution happens on load.
fn quote_value(value: &str) -> String {
    let plain = !value.is_empty()
        && !value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\\' | '"' | '\'' | '#' | '$'));
    if plain {
        value.to_string()
    } else if value.contains('\'') {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('$', "\\$");
        format!("\"{escaped}\"")
    } else {
        format!("'{value}'")
    }
}

fn is_entry_for(line: &str, key: &str) -> bool {
    line.split_once('=')
        .is_some_and(|(lhs, _)| lhs.trim().trim_start_matches("export ").trim() == key)
}

fn read_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).map_err(|e| env_file_error(path, &e))?;
    Ok(contents.lines().map(ToString::to_string).collect())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| env_file_error(path, &e))?;
    }

    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| env_file_error(path, &e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| env_file_error(path, &e))
}

fn env_file_error(path: &Path, error: &dyn std::fmt::Display) -> ConfigError {
    ConfigError::EnvFile {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}
