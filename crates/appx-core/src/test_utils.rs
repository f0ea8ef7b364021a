//! In-memory port implementations for tests.
//!
//! Available to this crate's unit tests and, through the `test-utils`
//! feature, to integration tests in downstream crates.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::arguments::ProcessArguments;
use crate::ports::{
    FileSystem, PlatformEnvironment, ProcessError, ProcessOptions, ProcessOutput, ProcessRunner,
    Registry, RegistryKey, SpecialPath, ToolLocator,
};
use crate::resolver::PackagerResolver;
use crate::tool::AppPackagerRunner;

/// Executable path used by [`runner_with_tool`].
pub const FAKE_TOOL_PATH: &str = "/tools/makeappx.exe";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A set of existing files that records every existence probe.
#[derive(Debug, Default)]
pub struct FakeFileSystem {
    files: Mutex<HashSet<PathBuf>>,
    probed: Mutex<Vec<PathBuf>>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            files: Mutex::new(files.into_iter().collect()),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn add(&self, path: impl Into<PathBuf>) {
        lock(&self.files).insert(path.into());
    }

    pub fn remove(&self, path: &Path) {
        lock(&self.files).remove(path);
    }

    /// Every path passed to `exists`, in call order.
    pub fn probed(&self) -> Vec<PathBuf> {
        lock(&self.probed).clone()
    }
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        lock(&self.probed).push(path.to_path_buf());
        lock(&self.files).contains(path)
    }
}

/// Fixed platform description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeEnvironment {
    pub is_64bit: bool,
    pub program_files: PathBuf,
    pub program_files_x86: PathBuf,
    pub working_directory: PathBuf,
}

impl FakeEnvironment {
    pub fn x64() -> Self {
        Self {
            is_64bit: true,
            program_files: PathBuf::from("/ProgramFiles"),
            program_files_x86: PathBuf::from("/ProgramFilesX86"),
            working_directory: PathBuf::from("/Working"),
        }
    }

    pub fn x86() -> Self {
        Self {
            is_64bit: false,
            ..Self::x64()
        }
    }

    #[must_use]
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = dir.into();
        self
    }
}

impl PlatformEnvironment for FakeEnvironment {
    fn is_64bit(&self) -> bool {
        self.is_64bit
    }

    fn special_path(&self, kind: SpecialPath) -> PathBuf {
        match kind {
            SpecialPath::ProgramFiles => self.program_files.clone(),
            SpecialPath::ProgramFilesX86 => self.program_files_x86.clone(),
        }
    }

    fn working_directory(&self) -> PathBuf {
        self.working_directory.clone()
    }
}

/// Tool locator with a canned answer.
#[derive(Debug, Default)]
pub struct FakeToolLocator {
    path: Option<PathBuf>,
    calls: AtomicUsize,
}

impl FakeToolLocator {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn returning(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ToolLocator for FakeToolLocator {
    fn resolve(&self, _executable_name: &str) -> Option<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.path.clone()
    }
}

/// Definition of a registry key: string values and ordered subkeys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeKey {
    values: Vec<(String, String)>,
    sub_keys: Vec<(String, FakeKey)>,
}

impl FakeKey {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.push((name.to_string(), value.to_string()));
        self
    }

    /// Subkeys are enumerated in the order they are added.
    #[must_use]
    pub fn with_sub_key(mut self, name: &str, key: Self) -> Self {
        self.sub_keys.push((name.to_string(), key));
        self
    }
}

/// Open handle onto a [`FakeKey`]; decrements the registry's open count on drop.
struct FakeKeyHandle {
    key: FakeKey,
    open: Arc<AtomicUsize>,
}

impl FakeKeyHandle {
    fn open(key: FakeKey, open: &Arc<AtomicUsize>) -> Box<dyn RegistryKey> {
        open.fetch_add(1, Ordering::SeqCst);
        Box::new(Self {
            key,
            open: Arc::clone(open),
        })
    }
}

impl RegistryKey for FakeKeyHandle {
    fn sub_key_names(&self) -> Vec<String> {
        self.key.sub_keys.iter().map(|(name, _)| name.clone()).collect()
    }

    fn open_sub_key(&self, name: &str) -> Option<Box<dyn RegistryKey>> {
        self.key
            .sub_keys
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, key)| Self::open(key.clone(), &self.open))
    }

    fn value(&self, name: &str) -> Option<String> {
        self.key
            .values
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

impl Drop for FakeKeyHandle {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Local-machine hive backed by [`FakeKey`] trees.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    roots: Vec<(String, FakeKey)>,
    open: Arc<AtomicUsize>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key(mut self, path: &str, key: FakeKey) -> Self {
        self.roots.push((path.to_string(), key));
        self
    }

    /// Handles currently open. Zero once every key has been dropped.
    pub fn open_handles(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

impl Registry for FakeRegistry {
    fn open_local_machine(&self, path: &str) -> Option<Box<dyn RegistryKey>> {
        self.roots
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(path))
            .map(|(_, key)| FakeKeyHandle::open(key.clone(), &self.open))
    }
}

/// A process launch captured by [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub arguments: ProcessArguments,
    pub options: ProcessOptions,
}

/// Process runner that records launches and returns a canned output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    output: ProcessOutput,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self::with_output(ProcessOutput::with_exit_code(0))
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::with_output(ProcessOutput {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    pub fn with_output(output: ProcessOutput) -> Self {
        Self {
            output,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        options: &ProcessOptions,
    ) -> Result<ProcessOutput, ProcessError> {
        lock(&self.calls).push(RecordedCall {
            program: program.to_path_buf(),
            arguments: arguments.clone(),
            options: options.clone(),
        });
        Ok(self.output.clone())
    }
}

/// A runner whose tool resolves to [`FAKE_TOOL_PATH`] on an x64 host working
/// in `/Working`.
pub fn runner_with_tool(process: RecordingRunner) -> (AppPackagerRunner, Arc<RecordingRunner>) {
    let fs = Arc::new(FakeFileSystem::with_files([PathBuf::from(FAKE_TOOL_PATH)]));
    let env = Arc::new(FakeEnvironment::x64());
    let process = Arc::new(process);
    let resolver = PackagerResolver::new(
        fs.clone(),
        env.clone(),
        Arc::new(FakeToolLocator::returning(FAKE_TOOL_PATH)),
        Arc::new(FakeRegistry::new()),
    );
    let runner = AppPackagerRunner::new(Box::new(resolver), process.clone(), fs, env);
    (runner, process)
}
