//! CLI-specific error types and mappings.
//!
//! Maps packager and configuration errors to exit codes and user-facing
//! messages.

use appx_core::PackagerError;
use appx_runtime::ConfigError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or missing arguments.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The packager executable could not be found.
    #[error("{0}")]
    ToolNotFound(String),

    /// The packager ran and reported failure.
    #[error("{message}")]
    ToolFailed {
        message: String,
        exit_code: Option<i32>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The packager process could not be started.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error, or the packager's own non-zero exit code
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,       // EX_USAGE
            Self::ToolNotFound(_) => 69,   // EX_UNAVAILABLE
            Self::ToolFailed { exit_code, .. } => match exit_code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
            Self::Config(_) => 78,  // EX_CONFIG
            Self::Process(_) => 71, // EX_OSERR
        }
    }
}

impl From<PackagerError> for CliError {
    fn from(err: PackagerError) -> Self {
        match err {
            PackagerError::InvalidArgument { .. } => Self::Arguments(err.to_string()),
            PackagerError::ToolNotFound { .. } | PackagerError::ToolPathNotFound { .. } => {
                Self::ToolNotFound(err.to_string())
            }
            PackagerError::ToolExecutionFailed { exit_code, .. } => Self::ToolFailed {
                message: err.to_string(),
                exit_code,
            },
            PackagerError::Process(ref process) => Self::Process(process.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
