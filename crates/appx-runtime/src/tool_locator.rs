//! Tool override lookup.

use std::env;
use std::path::PathBuf;

use appx_core::ToolLocator;
use tracing::debug;

use crate::config::TOOL_PATH_ENV;

/// Looks up an explicit override variable, then optionally `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvToolLocator {
    variable: String,
    search_path: bool,
}

impl Default for EnvToolLocator {
    fn default() -> Self {
        Self::new(TOOL_PATH_ENV)
    }
}

impl EnvToolLocator {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            search_path: true,
        }
    }

    /// Enable or disable the `PATH` fallback.
    #[must_use]
    pub const fn with_path_search(mut self, enabled: bool) -> Self {
        self.search_path = enabled;
        self
    }
}

impl ToolLocator for EnvToolLocator {
    fn resolve(&self, executable_name: &str) -> Option<PathBuf> {
        if let Ok(value) = env::var(&self.variable) {
            let value = value.trim();
            if !value.is_empty() {
                debug!(variable = %self.variable, path = value, "Using tool override");
                return Some(PathBuf::from(value));
            }
        }

        if !self.search_path {
            return None;
        }

        match which::which(executable_name) {
            Ok(path) => {
                debug!(path = %path.display(), "Found {executable_name} on PATH");
                Some(path)
            }
            Err(_) => None,
        }
    }
}
