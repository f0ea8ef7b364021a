//! Error types for packager operations.
//!
//! A single error enum covers argument validation, tool resolution and
//! execution of the external packager, keeping error plumbing out of the
//! resolver and the per-mode wrappers.

use std::path::PathBuf;
use thiserror::Error;

use crate::ports::ProcessError;

/// Errors that can occur while resolving or invoking the app packager.
#[derive(Debug, Error)]
pub enum PackagerError {
    // === Caller errors ===
    /// A required input was absent, empty or contradictory.
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    // === Resolution ===
    /// Every resolution strategy was exhausted without finding the executable.
    #[error("Failed to find {executable}.")]
    ToolNotFound {
        /// Display name of the missing executable
        executable: &'static str,
    },

    /// An explicitly configured tool path does not point at an existing file.
    #[error("App Packager: Could not locate executable at {}.", .path.display())]
    ToolPathNotFound { path: PathBuf },

    // === Execution ===
    /// The packager ran but reported failure.
    #[error("App Packager: Process returned an error ({}).{}", exit_status_text(.exit_code), stderr_suffix(.stderr))]
    ToolExecutionFailed {
        /// Exit code, if the process exited normally
        exit_code: Option<i32>,
        /// Captured standard error output
        stderr: String,
    },

    /// The process could not be started or awaited.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl PackagerError {
    /// Create an `InvalidArgument` error for a required input that was not supplied.
    pub fn missing(parameter: &'static str) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: "a value is required".to_string(),
        }
    }

    /// Create an `InvalidArgument` error with a custom reason.
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, for `InvalidArgument` errors.
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

fn exit_status_text(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

/// Result type alias for packager operations
pub type PackagerResult<T> = Result<T, PackagerError>;
