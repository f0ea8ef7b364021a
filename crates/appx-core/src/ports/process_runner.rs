//! Process runner trait definition.
//!
//! This port defines the interface for executing the packager. The core
//! hands over an executable path and ordered arguments; implementations
//! own spawning, waiting and output capture.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::arguments::ProcessArguments;

/// Errors raised when a process cannot be run at all.
///
/// A process that runs and exits non-zero is *not* a `ProcessError`; it is
/// reported through [`ProcessOutput::exit_code`].
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to start the process.
    #[error("Failed to start {}: {reason}", .program.display())]
    StartFailed { program: PathBuf, reason: String },

    /// Failed while waiting for the process or collecting its output.
    #[error("Failed to wait for {}: {reason}", .program.display())]
    WaitFailed { program: PathBuf, reason: String },
}

/// Options applied to a single process launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Directory to start the process in (inherits the caller's when `None`).
    pub working_directory: Option<PathBuf>,
}

impl ProcessOptions {
    /// Set the working directory.
    #[must_use]
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }
}

/// Result of a completed process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Create an output with the given exit code and no captured text.
    #[must_use]
    pub const fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Whether the process exited with code zero.
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Executes an external program and waits for it to finish.
///
/// # Design Rules
///
/// - Express **intent**, not implementation detail
/// - Blocking: the call returns once the process has exited
/// - Timeouts, if any, belong to the implementation
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `arguments` and capture its output.
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        options: &ProcessOptions,
    ) -> Result<ProcessOutput, ProcessError>;
}
