//! Platform environment adapter.

use std::env;
use std::path::PathBuf;

use appx_core::{PlatformEnvironment, SpecialPath};
use tracing::warn;

const DEFAULT_PROGRAM_FILES: &str = r"C:\Program Files";
const DEFAULT_PROGRAM_FILES_X86: &str = r"C:\Program Files (x86)";

/// Snapshot of the host platform taken at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    is_64bit: bool,
    program_files: PathBuf,
    program_files_x86: PathBuf,
    working_directory: PathBuf,
}

impl HostEnvironment {
    /// Read the current process environment.
    pub fn detect() -> Self {
        let working_directory = env::current_dir().unwrap_or_else(|e| {
            warn!(error = %e, "Cannot read current directory, using '.'");
            PathBuf::from(".")
        });
        Self::from_lookup(
            |name| env::var(name).ok(),
            cfg!(target_pointer_width = "64"),
            working_directory,
        )
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// A 32-bit process on a 64-bit OS still reports 64-bit through
    /// `PROCESSOR_ARCHITEW6432`. `ProgramW6432` takes precedence over
    /// `ProgramFiles` for the same reason.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        pointer_is_64bit: bool,
        working_directory: PathBuf,
    ) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let is_64bit = pointer_is_64bit || var("PROCESSOR_ARCHITEW6432").is_some();
        let program_files = var("ProgramW6432")
            .or_else(|| var("ProgramFiles"))
            .unwrap_or_else(|| DEFAULT_PROGRAM_FILES.to_string());
        let program_files_x86 = var("ProgramFiles(x86)")
            .unwrap_or_else(|| DEFAULT_PROGRAM_FILES_X86.to_string());

        Self {
            is_64bit,
            program_files: PathBuf::from(program_files),
            program_files_x86: PathBuf::from(program_files_x86),
            working_directory,
        }
    }
}

impl PlatformEnvironment for HostEnvironment {
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
