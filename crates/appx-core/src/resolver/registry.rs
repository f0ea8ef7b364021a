//! Registry fallback for locating an installed SDK.

use std::cmp::Ordering;
use std::path::PathBuf;

use tracing::debug;

use super::candidates::tool_under;
use crate::ports::{FileSystem, Registry, RegistryKey};

/// A local-machine key whose subkeys may name an SDK install root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryProbe {
    /// Path below `HKEY_LOCAL_MACHINE`.
    pub root: &'static str,
    /// Value names to read, primary first.
    pub value_names: &'static [&'static str],
}

/// Probes examined in order when no SDK directory matched.
pub const DEFAULT_REGISTRY_PROBES: &[RegistryProbe] = &[
    RegistryProbe {
        root: r"SOFTWARE\Microsoft\Windows Kits\Installed Roots",
        value_names: &["KitsRoot10", "KitsRoot81"],
    },
    RegistryProbe {
        root: r"SOFTWARE\Microsoft\Microsoft SDKs\Windows",
        value_names: &["InstallationFolder"],
    },
];

/// Search the registry for an existing executable.
///
/// Subkeys are visited newest version first, then the root key's own values.
/// Each subkey is released before the next is opened; every root is released
/// before this returns.
pub fn find_in_registry(
    registry: &dyn Registry,
    file_system: &dyn FileSystem,
    probes: &[RegistryProbe],
    architecture: &str,
) -> Option<PathBuf> {
    probes
        .iter()
        .find_map(|probe| probe_root(registry, file_system, probe, architecture))
}

fn probe_root(
    registry: &dyn Registry,
    file_system: &dyn FileSystem,
    probe: &RegistryProbe,
    architecture: &str,
) -> Option<PathBuf> {
    let Some(root) = registry.open_local_machine(probe.root) else {
        debug!(key = probe.root, "Registry key not present");
        return None;
    };

    let existing = |install_root: String| {
        let candidate = tool_under(&PathBuf::from(install_root), architecture);
        debug!(candidate = %candidate.display(), "Probing registry candidate");
        file_system.exists(&candidate).then_some(candidate)
    };

    sorted_newest_first(root.sub_key_names())
        .into_iter()
        .find_map(|name| {
            let sub_key = root.open_sub_key(&name)?;
            read_install_root(sub_key.as_ref(), probe.value_names).and_then(existing)
        })
        .or_else(|| read_install_root(root.as_ref(), probe.value_names).and_then(existing))
}

/// First non-blank value among `value_names`.
fn read_install_root(key: &dyn RegistryKey, value_names: &[&str]) -> Option<String> {
    value_names
        .iter()
        .filter_map(|name| key.value(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Order subkey names by descending version, ties broken by name.
///
/// `v10.0A` sorts as `[10, 0]`; names without digits sort last.
pub fn sorted_newest_first(mut names: Vec<String>) -> Vec<String> {
    names.sort_by(|a, b| match version_key(b).cmp(&version_key(a)) {
        Ordering::Equal => a.cmp(b),
        other => other,
    });
    names
}

fn version_key(name: &str) -> Vec<u64> {
    let numeric = name.trim_start_matches(|c: char| !c.is_ascii_digit());
    if numeric.is_empty() {
        return Vec::new();
    }
    numeric
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}
