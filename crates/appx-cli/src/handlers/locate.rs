//! Locate command handler.

use std::io::Write;

use anyhow::Result;
use appx_core::{AppPackagerRunner, PackagerSettings};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the packager executable that would be used and where it came from.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let stdout = std::io::stdout();
    write_location(ctx.runner(), &ctx.settings(), &mut stdout.lock())
}

pub fn write_location(
    runner: &AppPackagerRunner,
    settings: &PackagerSettings,
    out: &mut impl Write,
) -> Result<()> {
    let resolution = runner.tool_path(settings).map_err(CliError::from)?;
    writeln!(out, "{}", resolution.location)?;
    writeln!(out, "  source: {}", resolution.source)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appx_core::test_utils::{RecordingRunner, runner_with_tool};

    #[test]
    fn prints_location_and_source() {
        let (runner, process) = runner_with_tool(RecordingRunner::succeeding());

        let mut out = Vec::new();
        write_location(&runner, &PackagerSettings::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/tools/makeappx.exe\n  source: tool override\n"
        );
        assert!(process.calls().is_empty());
    }

    #[test]
    fn missing_explicit_path_is_reported() {
        let (runner, _process) = runner_with_tool(RecordingRunner::succeeding());
        let settings = PackagerSettings::new().with_tool_path("/nowhere/makeappx.exe");

        let err = write_location(&runner, &settings, &mut Vec::new()).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 69);
    }
}
