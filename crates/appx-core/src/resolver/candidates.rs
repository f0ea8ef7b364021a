//! Well-known SDK install locations.

use std::path::{Path, PathBuf};

use super::EXECUTABLE_NAME;
use crate::ports::{PlatformEnvironment, SpecialPath};

/// SDK versions probed under `Windows Kits`, newest first.
pub const SDK_VERSIONS: [&str; 3] = ["10", "8.1", "8.0"];

/// The `bin` subdirectory matching the platform word size.
pub fn architecture(environment: &dyn PlatformEnvironment) -> &'static str {
    if environment.is_64bit() { "x64" } else { "x86" }
}

/// `<root>\bin\<arch>\makeappx.exe`
pub fn tool_under(root: &Path, architecture: &str) -> PathBuf {
    root.join("bin").join(architecture).join(EXECUTABLE_NAME)
}

/// Candidate executables in probe order.
///
/// 64-bit hosts look under `Program Files (x86)` with the x64 tools, 32-bit
/// hosts under `Program Files` with the x86 tools. The two sets never mix.
pub fn sdk_candidates(environment: &dyn PlatformEnvironment) -> Vec<PathBuf> {
    let (base, arch) = if environment.is_64bit() {
        (environment.special_path(SpecialPath::ProgramFilesX86), "x64")
    } else {
        (environment.special_path(SpecialPath::ProgramFiles), "x86")
    };

    let kits = base.join("Windows Kits");
    SDK_VERSIONS
        .iter()
        .map(|version| tool_under(&kits.join(version), arch))
        .collect()
}
