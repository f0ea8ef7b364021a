//! Process execution adapter.

use std::path::Path;
use std::process::{Command, Stdio};

use appx_core::{ProcessArguments, ProcessError, ProcessOptions, ProcessOutput, ProcessRunner};
use tracing::{debug, info};

/// Runs the packager with `std::process::Command` and captures its output.
///
/// Arguments are passed as discrete values, so paths containing spaces never
/// need manual quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl ProcessRunner for CommandRunner {
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        options: &ProcessOptions,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut cmd = Command::new(program);
        cmd.args(arguments.tokens())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &options.working_directory {
            cmd.current_dir(dir);
        }

        info!(program = %program.display(), args = %arguments, "Executing");

        let child = cmd.spawn().map_err(|e| ProcessError::StartFailed {
            program: program.to_path_buf(),
            reason: e.to_string(),
        })?;
        let output = child
            .wait_with_output()
            .map_err(|e| ProcessError::WaitFailed {
                program: program.to_path_buf(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            debug!(target: "appx::tool", "{line}");
        }
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            debug!(target: "appx::tool", stream = "stderr", "{line}");
        }

        debug!(exit_code = ?output.status.code(), "Process finished");
        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout,
            stderr,
        })
    }
}
