//! Running the packager.
//!
//! [`AppPackagerRunner`] ties the pieces together: it builds arguments,
//! resolves the executable (or honours an explicit tool path) and hands both
//! to the process runner. The per-mode wrappers are borrowed views over one
//! runner so they share its resolver cache.

mod create;
mod crypt;
mod extract;

pub use create::{AppBundler, AppPacker};
pub use crypt::{AppDecrypter, AppEncrypter};
pub use extract::{AppUnbundler, AppUnpacker};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::arguments::ProcessArguments;
use crate::error::{PackagerError, PackagerResult};
use crate::invocation::{InvocationPaths, OperatingMode, build_arguments};
use crate::paths::{make_absolute, require_path};
use crate::ports::{FileSystem, PlatformEnvironment, ProcessOptions, ProcessOutput, ProcessRunner};
use crate::resolver::{Resolution, ToolPathSource, ToolResolver};
use crate::settings::PackagerSettings;

/// A fully validated invocation, ready to execute or display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInvocation {
    pub mode: OperatingMode,
    pub executable: Resolution,
    pub arguments: ProcessArguments,
    pub working_directory: PathBuf,
}

impl PreparedInvocation {
    /// The invocation as a single display string.
    pub fn command_line(&self) -> String {
        format!("\"{}\" {}", self.executable.location, self.arguments)
    }
}

impl fmt::Display for PreparedInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Drives the packager executable for any operating mode.
pub struct AppPackagerRunner {
    resolver: Box<dyn ToolResolver>,
    process_runner: Arc<dyn ProcessRunner>,
    file_system: Arc<dyn FileSystem>,
    environment: Arc<dyn PlatformEnvironment>,
}

impl AppPackagerRunner {
    pub fn new(
        resolver: Box<dyn ToolResolver>,
        process_runner: Arc<dyn ProcessRunner>,
        file_system: Arc<dyn FileSystem>,
        environment: Arc<dyn PlatformEnvironment>,
    ) -> Self {
        Self {
            resolver,
            process_runner,
            file_system,
            environment,
        }
    }

    pub fn packer(&self) -> AppPacker<'_> {
        AppPacker::new(self)
    }

    pub fn unpacker(&self) -> AppUnpacker<'_> {
        AppUnpacker::new(self)
    }

    pub fn bundler(&self) -> AppBundler<'_> {
        AppBundler::new(self)
    }

    pub fn unbundler(&self) -> AppUnbundler<'_> {
        AppUnbundler::new(self)
    }

    pub fn encrypter(&self) -> AppEncrypter<'_> {
        AppEncrypter::new(self)
    }

    pub fn decrypter(&self) -> AppDecrypter<'_> {
        AppDecrypter::new(self)
    }

    /// Directory relative paths are resolved against and the tool runs in.
    pub fn working_directory(&self, settings: &PackagerSettings) -> PathBuf {
        let base = self.environment.working_directory();
        match settings.working_directory.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => make_absolute(dir, &base),
            _ => base,
        }
    }

    /// The executable to run: the explicit tool path when set, otherwise
    /// the resolver's answer.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::ToolPathNotFound`] for a missing explicit
    /// path, or the resolver's error.
    pub fn tool_path(&self, settings: &PackagerSettings) -> PackagerResult<Resolution> {
        let Some(explicit) = settings.tool_path.as_deref() else {
            return self.resolver.resolve_with_source();
        };

        let explicit = require_path("tool_path", explicit)?;
        let path = make_absolute(explicit, &self.working_directory(settings));
        if !self.file_system.exists(&path) {
            return Err(PackagerError::ToolPathNotFound { path });
        }
        Ok(Resolution::new(path, ToolPathSource::Settings))
    }

    /// Validate inputs, build the arguments and locate the executable.
    ///
    /// Arguments are validated before the executable is looked up, so a
    /// caller error never triggers a filesystem or registry probe.
    pub fn prepare(
        &self,
        mode: OperatingMode,
        paths: &InvocationPaths,
        settings: &PackagerSettings,
    ) -> PackagerResult<PreparedInvocation> {
        let working_directory = self.working_directory(settings);
        let arguments = build_arguments(mode, paths, settings, &working_directory)?;
        let executable = self.tool_path(settings)?;

        debug!(
            mode = %mode,
            tool = %executable.location,
            source = %executable.source,
            "Prepared packager invocation"
        );

        Ok(PreparedInvocation {
            mode,
            executable,
            arguments,
            working_directory,
        })
    }

    /// Execute a prepared invocation and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::ToolExecutionFailed`] when the packager exits
    /// non-zero, or [`PackagerError::Process`] when it cannot be started.
    pub fn execute(&self, invocation: &PreparedInvocation) -> PackagerResult<ProcessOutput> {
        debug!(command = %invocation.command_line(), "Running App Packager");

        let options =
            ProcessOptions::default().with_working_directory(invocation.working_directory.clone());
        let output = self.process_runner.run(
            invocation.executable.location.as_path(),
            &invocation.arguments,
            &options,
        )?;

        if !output.success() {
            return Err(PackagerError::ToolExecutionFailed {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }
        Ok(output)
    }

    /// Prepare and execute one invocation.
    pub fn run(
        &self,
        mode: OperatingMode,
        paths: &InvocationPaths,
        settings: &PackagerSettings,
    ) -> PackagerResult<ProcessOutput> {
        let invocation = self.prepare(mode, paths, settings)?;
        self.execute(&invocation)
    }
}

impl fmt::Debug for AppPackagerRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppPackagerRunner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::ContentSource;
    use crate::resolver::PackagerResolver;
    use crate::test_utils::{
        FakeEnvironment, FakeFileSystem, FakeRegistry, FakeToolLocator, RecordingRunner,
    };
    use std::path::Path;

    const TOOL: &str = "/tools/makeappx.exe";

    struct Harness {
        fs: Arc<FakeFileSystem>,
        process: Arc<RecordingRunner>,
        runner: AppPackagerRunner,
    }

    fn harness(process: RecordingRunner) -> Harness {
        let fs = Arc::new(FakeFileSystem::with_files([PathBuf::from(TOOL)]));
        let env = Arc::new(FakeEnvironment::x64());
        let process = Arc::new(process);
        let resolver = PackagerResolver::new(
            fs.clone(),
            env.clone(),
            Arc::new(FakeToolLocator::returning(TOOL)),
            Arc::new(FakeRegistry::new()),
        );
        let runner = AppPackagerRunner::new(Box::new(resolver), process.clone(), fs.clone(), env);
        Harness { fs, process, runner }
    }

    fn pack_paths() -> InvocationPaths {
        InvocationPaths::create("test.appx", ContentSource::Directory("content".into()))
    }

    #[test]
    fn run_passes_resolved_tool_and_arguments_to_process_runner() {
        let h = harness(RecordingRunner::succeeding());
        h.runner
            .run(OperatingMode::Pack, &pack_paths(), &PackagerSettings::default())
            .unwrap();

        let calls = h.process.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, PathBuf::from(TOOL));
        assert_eq!(
            calls[0].arguments.tokens(),
            vec!["pack", "/p", "/Working/test.appx", "/d", "/Working/content"]
        );
        assert_eq!(
            calls[0].options.working_directory.as_deref(),
            Some(Path::new("/Working"))
        );
    }

    #[test]
    fn non_zero_exit_is_reported_with_stderr() {
        let h = harness(RecordingRunner::failing(2, "error: manifest invalid"));
        let err = h
            .runner
            .run(OperatingMode::Pack, &pack_paths(), &PackagerSettings::default())
            .unwrap_err();

        match err {
            PackagerError::ToolExecutionFailed { exit_code, stderr } => {
                assert_eq!(exit_code, Some(2));
                assert_eq!(stderr, "error: manifest invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_arguments_never_reach_resolution() {
        let h = harness(RecordingRunner::succeeding());
        let paths = InvocationPaths::create("", ContentSource::Directory("content".into()));
        let err = h
            .runner
            .run(OperatingMode::Pack, &paths, &PackagerSettings::default())
            .unwrap_err();

        assert_eq!(err.parameter(), Some("output_package"));
        assert!(h.fs.probed().is_empty());
        assert!(h.process.calls().is_empty());
    }

    #[test]
    fn explicit_tool_path_bypasses_resolution() {
        let h = harness(RecordingRunner::succeeding());
        h.fs.add("/Working/bin/makeappx.exe");
        let settings = PackagerSettings::new().with_tool_path("bin/makeappx.exe");

        let prepared = h
            .runner
            .prepare(OperatingMode::Pack, &pack_paths(), &settings)
            .unwrap();
        assert_eq!(prepared.executable.source, ToolPathSource::Settings);
        assert_eq!(
            prepared.executable.location.as_path(),
            Path::new("/Working/bin/makeappx.exe")
        );
    }

    #[test]
    fn missing_explicit_tool_path_is_an_error() {
        let h = harness(RecordingRunner::succeeding());
        let settings = PackagerSettings::new().with_tool_path("/nowhere/makeappx.exe");

        let err = h
            .runner
            .run(OperatingMode::Pack, &pack_paths(), &settings)
            .unwrap_err();
        assert!(matches!(err, PackagerError::ToolPathNotFound { .. }));
        assert!(h.process.calls().is_empty());
    }

    #[test]
    fn settings_working_directory_is_relative_to_environment() {
        let h = harness(RecordingRunner::succeeding());
        let settings = PackagerSettings::new().with_working_directory("My Project");

        let prepared = h
            .runner
            .prepare(OperatingMode::Pack, &pack_paths(), &settings)
            .unwrap();
        assert_eq!(prepared.working_directory, PathBuf::from("/Working/My Project"));
        assert_eq!(
            prepared.command_line(),
            "\"/tools/makeappx.exe\" pack /p \"/Working/My Project/test.appx\" /d \"/Working/My Project/content\""
        );
    }

    #[test]
    fn wrappers_share_the_resolver_cache() {
        let h = harness(RecordingRunner::succeeding());
        let settings = PackagerSettings::default();

        h.runner.packer().pack_directory("a.appx", "content", &settings).unwrap();
        h.runner.unpacker().unpack("a.appx", "out", &settings).unwrap();

        // override check, then a single cache re-validation
        let tool_probes = h
            .fs
            .probed()
            .into_iter()
            .filter(|p| p == Path::new(TOOL))
            .count();
        assert_eq!(tool_probes, 2);
    }
}
