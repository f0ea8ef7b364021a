//! Packager executable resolution.
//!
//! Resolution is layered and strictly ordered:
//!
//! 1. Cached location, if the file still exists
//! 2. Host override (`ToolLocator`)
//! 3. Windows Kits install directories for the platform architecture
//! 4. Registry-recorded SDK install roots
//!
//! The first existing file wins and is cached for the resolver's lifetime.

mod candidates;
mod registry;

pub use candidates::{SDK_VERSIONS, sdk_candidates};
pub use registry::{DEFAULT_REGISTRY_PROBES, RegistryProbe};

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{PackagerError, PackagerResult};
use crate::paths::make_absolute;
use crate::ports::{FileSystem, PlatformEnvironment, Registry, ToolLocator};

/// File name looked up on disk and through the tool locator.
pub const EXECUTABLE_NAME: &str = "makeappx.exe";

/// Name used in user-facing messages.
pub const DISPLAY_NAME: &str = "MakeAppx.exe";

/// Absolute path to the packager executable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolLocation(PathBuf);

impl ToolLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ToolLocation {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ToolLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Where a resolved executable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolPathSource {
    /// `PackagerSettings::tool_path` was set for the invocation.
    Settings,
    /// The host tool locator (environment variable or `PATH`).
    Override,
    /// A Windows Kits install directory.
    SdkDirectory,
    /// An install root recorded in the registry.
    Registry,
}

impl ToolPathSource {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Settings => "explicit tool path",
            Self::Override => "tool override",
            Self::SdkDirectory => "Windows Kits directory",
            Self::Registry => "registry install root",
        }
    }
}

impl fmt::Display for ToolPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A resolved location together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub location: ToolLocation,
    pub source: ToolPathSource,
}

impl Resolution {
    pub fn new(location: impl Into<PathBuf>, source: ToolPathSource) -> Self {
        Self {
            location: ToolLocation::new(location),
            source,
        }
    }
}

/// Anything that can produce the packager executable path.
pub trait ToolResolver {
    /// Resolve the executable and report where it was found.
    fn resolve_with_source(&self) -> PackagerResult<Resolution>;

    /// Resolve the executable.
    fn resolve(&self) -> PackagerResult<ToolLocation> {
        self.resolve_with_source().map(|resolution| resolution.location)
    }
}

/// Layered resolver with a re-validated one-slot cache.
///
/// The cache uses a `RefCell`, so a resolver is `!Sync`: share it within one
/// thread or wrap it in a lock.
pub struct PackagerResolver {
    file_system: Arc<dyn FileSystem>,
    environment: Arc<dyn PlatformEnvironment>,
    tool_locator: Arc<dyn ToolLocator>,
    registry: Arc<dyn Registry>,
    registry_probes: &'static [RegistryProbe],
    cache: RefCell<Option<Resolution>>,
}

impl fmt::Debug for PackagerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackagerResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl PackagerResolver {
    /// Create a resolver from its four collaborators.
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        environment: Arc<dyn PlatformEnvironment>,
        tool_locator: Arc<dyn ToolLocator>,
        registry: Arc<dyn Registry>,
    ) -> Self {
        Self {
            file_system,
            environment,
            tool_locator,
            registry,
            registry_probes: DEFAULT_REGISTRY_PROBES,
            cache: RefCell::new(None),
        }
    }

    /// Start a builder that reports missing collaborators as errors.
    pub fn builder() -> PackagerResolverBuilder {
        PackagerResolverBuilder::default()
    }

    /// The cached resolution, without re-validating it.
    pub fn cached(&self) -> Option<Resolution> {
        self.cache.borrow().clone()
    }

    /// Forget the cached resolution.
    pub fn clear_cache(&self) {
        *self.cache.borrow_mut() = None;
    }

    fn cached_if_present(&self) -> Option<Resolution> {
        let cached = self.cached()?;
        if self.file_system.exists(cached.location.as_path()) {
            debug!(path = %cached.location, "Using cached {DISPLAY_NAME}");
            return Some(cached);
        }
        warn!(
            path = %cached.location,
            "Cached {DISPLAY_NAME} no longer exists, resolving again"
        );
        self.clear_cache();
        None
    }

    fn from_override(&self) -> Option<PathBuf> {
        let found = self.tool_locator.resolve(EXECUTABLE_NAME)?;
        let path = make_absolute(&found, &self.environment.working_directory());
        if self.file_system.exists(&path) {
            return Some(path);
        }
        warn!(path = %path.display(), "Tool override does not exist, ignoring it");
        None
    }

    fn from_sdk_directories(&self) -> Option<PathBuf> {
        sdk_candidates(self.environment.as_ref())
            .into_iter()
            .find(|candidate| {
                debug!(candidate = %candidate.display(), "Probing SDK directory");
                self.file_system.exists(candidate)
            })
    }

    fn from_registry(&self) -> Option<PathBuf> {
        registry::find_in_registry(
            self.registry.as_ref(),
            self.file_system.as_ref(),
            self.registry_probes,
            candidates::architecture(self.environment.as_ref()),
        )
    }

    fn search(&self) -> Option<Resolution> {
        if let Some(path) = self.from_override() {
            return Some(Resolution::new(path, ToolPathSource::Override));
        }
        if let Some(path) = self.from_sdk_directories() {
            return Some(Resolution::new(path, ToolPathSource::SdkDirectory));
        }
        self.from_registry()
            .map(|path| Resolution::new(path, ToolPathSource::Registry))
    }
}

impl ToolResolver for PackagerResolver {
    fn resolve_with_source(&self) -> PackagerResult<Resolution> {
        if let Some(cached) = self.cached_if_present() {
            return Ok(cached);
        }

        let resolution = self.search().ok_or(PackagerError::ToolNotFound {
            executable: DISPLAY_NAME,
        })?;
        debug!(
            path = %resolution.location,
            source = %resolution.source,
            "Resolved {DISPLAY_NAME}"
        );
        *self.cache.borrow_mut() = Some(resolution.clone());
        Ok(resolution)
    }
}

/// Builder for [`PackagerResolver`].
///
/// Each collaborator is required; [`build`](Self::build) names the first
/// one that was never supplied.
#[derive(Default)]
pub struct PackagerResolverBuilder {
    file_system: Option<Arc<dyn FileSystem>>,
    environment: Option<Arc<dyn PlatformEnvironment>>,
    tool_locator: Option<Arc<dyn ToolLocator>>,
    registry: Option<Arc<dyn Registry>>,
    registry_probes: Option<&'static [RegistryProbe]>,
}

impl PackagerResolverBuilder {
    #[must_use]
    pub fn file_system(mut self, file_system: Arc<dyn FileSystem>) -> Self {
        self.file_system = Some(file_system);
        self
    }

    #[must_use]
    pub fn environment(mut self, environment: Arc<dyn PlatformEnvironment>) -> Self {
        self.environment = Some(environment);
        self
    }

    #[must_use]
    pub fn tool_locator(mut self, tool_locator: Arc<dyn ToolLocator>) -> Self {
        self.tool_locator = Some(tool_locator);
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: Arc<dyn Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replace the default registry probes.
    #[must_use]
    pub const fn registry_probes(mut self, probes: &'static [RegistryProbe]) -> Self {
        self.registry_probes = Some(probes);
        self
    }

    /// # Errors
    ///
    /// Returns [`PackagerError::InvalidArgument`] naming `file_system`,
    /// `environment`, `tool_locator` or `registry` when it was not supplied.
    pub fn build(self) -> PackagerResult<PackagerResolver> {
        let file_system = self
            .file_system
            .ok_or_else(|| PackagerError::missing("file_system"))?;
        let environment = self
            .environment
            .ok_or_else(|| PackagerError::missing("environment"))?;
        let tool_locator = self
            .tool_locator
            .ok_or_else(|| PackagerError::missing("tool_locator"))?;
        let registry = self
            .registry
            .ok_or_else(|| PackagerError::missing("registry"))?;

        let mut resolver = PackagerResolver::new(file_system, environment, tool_locator, registry);
        if let Some(probes) = self.registry_probes {
            resolver.registry_probes = probes;
        }
        Ok(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockFileSystem, MockToolLocator};
    use crate::test_utils::{FakeEnvironment, FakeFileSystem, FakeKey, FakeRegistry, FakeToolLocator};

    fn sdk_tool(root: &Path, version: &str, arch: &str) -> PathBuf {
        root.join("Windows Kits")
            .join(version)
            .join("bin")
            .join(arch)
            .join("makeappx.exe")
    }

    fn resolver(
        fs: &Arc<FakeFileSystem>,
        env: FakeEnvironment,
        locator: FakeToolLocator,
        registry: &Arc<FakeRegistry>,
    ) -> PackagerResolver {
        PackagerResolver::new(fs.clone(), Arc::new(env), Arc::new(locator), registry.clone())
    }

    #[test]
    fn builder_names_each_missing_collaborator() {
        let fs: Arc<dyn FileSystem> = Arc::new(FakeFileSystem::new());
        let env: Arc<dyn PlatformEnvironment> = Arc::new(FakeEnvironment::x64());
        let locator: Arc<dyn ToolLocator> = Arc::new(FakeToolLocator::none());

        let err = PackagerResolver::builder().build().unwrap_err();
        assert_eq!(err.parameter(), Some("file_system"));

        let err = PackagerResolver::builder()
            .file_system(fs.clone())
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("environment"));

        let err = PackagerResolver::builder()
            .file_system(fs.clone())
            .environment(env.clone())
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("tool_locator"));

        let err = PackagerResolver::builder()
            .file_system(fs)
            .environment(env)
            .tool_locator(locator)
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("registry"));
    }

    #[test]
    fn override_wins_over_sdk_directories() {
        let env = FakeEnvironment::x64();
        let sdk = sdk_tool(&env.program_files_x86, "10", "x64");
        let fs = Arc::new(FakeFileSystem::with_files([
            PathBuf::from("/tools/makeappx.exe"),
            sdk,
        ]));
        let registry = Arc::new(FakeRegistry::new());

        let resolver = resolver(&fs, env, FakeToolLocator::returning("/tools/makeappx.exe"), &registry);
        let resolution = resolver.resolve_with_source().unwrap();

        assert_eq!(resolution.location.as_path(), Path::new("/tools/makeappx.exe"));
        assert_eq!(resolution.source, ToolPathSource::Override);
    }

    #[test]
    fn builder_reports_each_collaborator_missing_on_its_own() {
        fn fs() -> Arc<dyn FileSystem> {
            Arc::new(FakeFileSystem::new())
        }
        fn env() -> Arc<dyn PlatformEnvironment> {
            Arc::new(FakeEnvironment::x64())
        }
        fn locator() -> Arc<dyn ToolLocator> {
            Arc::new(FakeToolLocator::none())
        }
        fn registry() -> Arc<dyn Registry> {
            Arc::new(FakeRegistry::new())
        }

        let err = PackagerResolver::builder()
            .environment(env())
            .tool_locator(locator())
            .registry(registry())
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("file_system"));

        let err = PackagerResolver::builder()
            .file_system(fs())
            .tool_locator(locator())
            .registry(registry())
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("environment"));

        let err = PackagerResolver::builder()
            .file_system(fs())
            .environment(env())
            .registry(registry())
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("tool_locator"));

        assert!(
            PackagerResolver::builder()
                .file_system(fs())
                .environment(env())
                .tool_locator(locator())
                .registry(registry())
                .build()
                .is_ok()
        );
    }

    #[test]
    fn override_wins_over_registry_install_root() {
        let registry_tool = PathBuf::from("/sdk/10").join("bin").join("x64").join("makeappx.exe");
        let fs = Arc::new(FakeFileSystem::with_files([
            PathBuf::from("/tools/makeappx.exe"),
            registry_tool,
        ]));
        let registry = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Microsoft\Microsoft SDKs\Windows",
            FakeKey::new()
                .with_sub_key("v10.0", FakeKey::new().with_value("InstallationFolder", "/sdk/10")),
        ));

        let resolver = resolver(
            &fs,
            FakeEnvironment::x64(),
            FakeToolLocator::returning("/tools/makeappx.exe"),
            &registry,
        );
        let resolution = resolver.resolve_with_source().unwrap();

        assert_eq!(resolution.location.as_path(), Path::new("/tools/makeappx.exe"));
        assert_eq!(resolution.source, ToolPathSource::Override);
        assert_eq!(registry.open_handles(), 0);
    }

    #[test]
    fn relative_override_is_made_absolute_against_working_directory() {
        let env = FakeEnvironment::x64();
        let expected = env.working_directory.join("tools").join("makeappx.exe");
        let fs = Arc::new(FakeFileSystem::with_files([expected.clone()]));
        let registry = Arc::new(FakeRegistry::new());

        let resolver = resolver(&fs, env, FakeToolLocator::returning("tools/makeappx.exe"), &registry);
        let location = resolver.resolve().unwrap();

        assert!(location.as_path().is_absolute());
        assert_eq!(location.as_path(), expected);
        assert_eq!(fs.probed(), vec![expected.clone()]);
        assert_eq!(resolver.cached().unwrap().location.as_path(), expected);
    }

    #[test]
    fn stale_override_falls_through_to_sdk_directories() {
        let env = FakeEnvironment::x64();
        let sdk = sdk_tool(&env.program_files_x86, "8.1", "x64");
        let fs = Arc::new(FakeFileSystem::with_files([sdk.clone()]));
        let registry = Arc::new(FakeRegistry::new());

        let resolver = resolver(&fs, env, FakeToolLocator::returning("/gone/makeappx.exe"), &registry);
        let resolution = resolver.resolve_with_source().unwrap();

        assert_eq!(resolution.location.as_path(), sdk);
        assert_eq!(resolution.source, ToolPathSource::SdkDirectory);
    }

    #[test]
    fn newest_sdk_version_wins() {
        let env = FakeEnvironment::x64();
        let fs = Arc::new(FakeFileSystem::with_files([
            sdk_tool(&env.program_files_x86, "8.0", "x64"),
            sdk_tool(&env.program_files_x86, "10", "x64"),
        ]));
        let expected = sdk_tool(&env.program_files_x86, "10", "x64");
        let registry = Arc::new(FakeRegistry::new());

        let resolver = resolver(&fs, env, FakeToolLocator::none(), &registry);
        assert_eq!(resolver.resolve().unwrap().as_path(), expected);
    }

    #[test]
    fn x86_platform_never_probes_x64_locations() {
        let env = FakeEnvironment::x86();
        let fs = Arc::new(FakeFileSystem::with_files([sdk_tool(
            &env.program_files_x86,
            "10",
            "x64",
        )]));
        let registry = Arc::new(FakeRegistry::new());

        let resolver = resolver(&fs, env, FakeToolLocator::none(), &registry);
        assert!(matches!(
            resolver.resolve(),
            Err(PackagerError::ToolNotFound { .. })
        ));
        assert!(fs.probed().iter().all(|p| !p.components().any(|c| c.as_os_str() == "x64")));
    }

    #[test]
    fn x64_platform_never_probes_x86_locations() {
        let env = FakeEnvironment::x64();
        let fs = Arc::new(FakeFileSystem::new());
        let registry = Arc::new(FakeRegistry::new());

        let resolver = resolver(&fs, env, FakeToolLocator::none(), &registry);
        assert!(resolver.resolve().is_err());
        assert_eq!(fs.probed().len(), 3);
        assert!(fs.probed().iter().all(|p| !p.components().any(|c| c.as_os_str() == "x86")));
    }

    #[test]
    fn registry_is_used_when_override_and_directories_fail() {
        let tool = PathBuf::from("/sdk/10").join("bin").join("x64").join("makeappx.exe");
        let fs = Arc::new(FakeFileSystem::with_files([tool.clone()]));
        let registry = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Microsoft\Microsoft SDKs\Windows",
            FakeKey::new()
                .with_sub_key("v8.1", FakeKey::new().with_value("InstallationFolder", "/sdk/8.1"))
                .with_sub_key("v10.0", FakeKey::new().with_value("InstallationFolder", "/sdk/10")),
        ));

        let resolver = resolver(&fs, FakeEnvironment::x64(), FakeToolLocator::none(), &registry);
        let resolution = resolver.resolve_with_source().unwrap();

        assert_eq!(resolution.location.as_path(), tool);
        assert_eq!(resolution.source, ToolPathSource::Registry);
        assert_eq!(registry.open_handles(), 0);
    }

    #[test]
    fn registry_prefers_newest_version_independent_of_enumeration_order() {
        let old = PathBuf::from("/sdk/8.1").join("bin").join("x64").join("makeappx.exe");
        let new = PathBuf::from("/sdk/10").join("bin").join("x64").join("makeappx.exe");
        let fs = Arc::new(FakeFileSystem::with_files([old, new.clone()]));
        let registry = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Microsoft\Microsoft SDKs\Windows",
            FakeKey::new()
                .with_sub_key("v8.1", FakeKey::new().with_value("InstallationFolder", "/sdk/8.1"))
                .with_sub_key("v10.0", FakeKey::new().with_value("InstallationFolder", "/sdk/10")),
        ));

        let resolver = resolver(&fs, FakeEnvironment::x64(), FakeToolLocator::none(), &registry);
        assert_eq!(resolver.resolve().unwrap().as_path(), new);
    }

    #[test]
    fn registry_falls_back_to_secondary_value_name() {
        let tool = PathBuf::from("/kits/8.1").join("bin").join("x86").join("makeappx.exe");
        let fs = Arc::new(FakeFileSystem::with_files([tool.clone()]));
        let registry = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Microsoft\Windows Kits\Installed Roots",
            FakeKey::new().with_sub_key(
                "8.1",
                FakeKey::new()
                    .with_value("KitsRoot10", "   ")
                    .with_value("KitsRoot81", "/kits/8.1"),
            ),
        ));

        let resolver = resolver(&fs, FakeEnvironment::x86(), FakeToolLocator::none(), &registry);
        assert_eq!(resolver.resolve().unwrap().as_path(), tool);
    }

    #[test]
    fn registry_root_values_are_read_after_subkeys() {
        let tool = PathBuf::from("/kits/10").join("bin").join("x64").join("makeappx.exe");
        let fs = Arc::new(FakeFileSystem::with_files([tool.clone()]));
        let registry = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Microsoft\Windows Kits\Installed Roots",
            FakeKey::new()
                .with_value("KitsRoot10", "/kits/10")
                .with_sub_key("10.0.22621.0", FakeKey::new()),
        ));

        let resolver = resolver(&fs, FakeEnvironment::x64(), FakeToolLocator::none(), &registry);
        assert_eq!(resolver.resolve().unwrap().as_path(), tool);
        assert_eq!(registry.open_handles(), 0);
    }

    #[test]
    fn exhausted_search_reports_tool_not_found() {
        let fs = Arc::new(FakeFileSystem::new());
        let registry = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Microsoft\Microsoft SDKs\Windows",
            FakeKey::new().with_sub_key("v10.0", FakeKey::new()),
        ));

        let resolver = resolver(&fs, FakeEnvironment::x64(), FakeToolLocator::none(), &registry);
        let err = resolver.resolve().unwrap_err();

        assert!(err.to_string().contains("MakeAppx.exe"));
        assert_eq!(err.to_string(), "Failed to find MakeAppx.exe.");
        assert_eq!(registry.open_handles(), 0);
        assert!(resolver.cached().is_none());
    }

    #[test]
    fn resolution_is_idempotent_and_cached() {
        let mut locator = MockToolLocator::new();
        locator
            .expect_resolve()
            .withf(|name| name == "makeappx.exe")
            .times(1)
            .returning(|_| Some(PathBuf::from("/tools/makeappx.exe")));

        // Once for the override check, once for cache re-validation.
        let mut fs = MockFileSystem::new();
        fs.expect_exists().times(2).returning(|_| true);

        let resolver = PackagerResolver::new(
            Arc::new(fs),
            Arc::new(FakeEnvironment::x64()),
            Arc::new(locator),
            Arc::new(FakeRegistry::new()),
        );

        let first = resolver.resolve().unwrap();
        let second = resolver.resolve().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn deleted_cached_tool_is_resolved_again() {
        let env = FakeEnvironment::x64();
        let newest = sdk_tool(&env.program_files_x86, "10", "x64");
        let older = sdk_tool(&env.program_files_x86, "8.1", "x64");
        let fs = Arc::new(FakeFileSystem::with_files([newest.clone(), older.clone()]));
        let registry = Arc::new(FakeRegistry::new());
        let resolver = resolver(&fs, env, FakeToolLocator::none(), &registry);

        assert_eq!(resolver.resolve().unwrap().as_path(), newest);
        fs.remove(&newest);
        assert_eq!(resolver.resolve().unwrap().as_path(), older);
        assert_eq!(resolver.cached().unwrap().location.as_path(), older);
    }

    #[test]
    fn deleted_cached_tool_with_nothing_left_fails() {
        let env = FakeEnvironment::x64();
        let newest = sdk_tool(&env.program_files_x86, "10", "x64");
        let fs = Arc::new(FakeFileSystem::with_files([newest.clone()]));
        let registry = Arc::new(FakeRegistry::new());
        let resolver = resolver(&fs, env, FakeToolLocator::none(), &registry);

        resolver.resolve().unwrap();
        fs.remove(&newest);
        assert!(matches!(
            resolver.resolve(),
            Err(PackagerError::ToolNotFound { executable: "MakeAppx.exe" })
        ));
        assert!(resolver.cached().is_none());
    }

    #[test]
    fn custom_registry_probes_replace_defaults() {
        static PROBES: &[RegistryProbe] = &[RegistryProbe {
            root: r"SOFTWARE\Contoso\Packager",
            value_names: &["Root"],
        }];
        let tool = PathBuf::from("/contoso").join("bin").join("x64").join("makeappx.exe");
        let fs: Arc<dyn FileSystem> = Arc::new(FakeFileSystem::with_files([tool.clone()]));
        let registry: Arc<dyn Registry> = Arc::new(FakeRegistry::new().with_key(
            r"SOFTWARE\Contoso\Packager",
            FakeKey::new().with_sub_key("1.0", FakeKey::new().with_value("Root", "/contoso")),
        ));

        let resolver = PackagerResolver::builder()
            .file_system(fs)
            .environment(Arc::new(FakeEnvironment::x64()))
            .tool_locator(Arc::new(FakeToolLocator::none()))
            .registry(registry)
            .registry_probes(PROBES)
            .build()
            .unwrap();
        assert_eq!(resolver.resolve().unwrap().as_path(), tool);
    }
}
