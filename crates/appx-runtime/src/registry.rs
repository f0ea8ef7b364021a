//! Registry adapter.
//!
//! On Windows keys are opened read-only under `HKEY_LOCAL_MACHINE` and closed
//! when dropped. Other platforms have no registry, so every lookup misses.

use appx_core::{Registry, RegistryKey};

/// The host's local-machine registry hive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRegistry;

#[cfg(windows)]
mod imp {
    use appx_core::RegistryKey;
    use tracing::debug;
    use winreg::RegKey;
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};

    /// An open `winreg` key; the handle closes when this is dropped.
    pub struct WindowsKey(RegKey);

    impl RegistryKey for WindowsKey {
        fn sub_key_names(&self) -> Vec<String> {
            self.0.enum_keys().filter_map(Result::ok).collect()
        }

        fn open_sub_key(&self, name: &str) -> Option<Box<dyn RegistryKey>> {
            self.0
                .open_subkey_with_flags(name, KEY_READ)
                .ok()
                .map(|key| Box::new(Self(key)) as Box<dyn RegistryKey>)
        }

        fn value(&self, name: &str) -> Option<String> {
            self.0.get_value::<String, _>(name).ok()
        }
    }

    pub fn open_local_machine(path: &str) -> Option<Box<dyn RegistryKey>> {
        match RegKey::predef(HKEY_LOCAL_MACHINE).open_subkey_with_flags(path, KEY_READ) {
            Ok(key) => Some(Box::new(WindowsKey(key))),
            Err(e) => {
                debug!(key = path, error = %e, "Registry key unavailable");
                None
            }
        }
    }
}

#[cfg(not(windows))]
mod imp {
    use appx_core::RegistryKey;

    pub fn open_local_machine(_path: &str) -> Option<Box<dyn RegistryKey>> {
        None
    }
}

impl Registry for SystemRegistry {
    fn open_local_machine(&self, path: &str) -> Option<Box<dyn RegistryKey>> {
        imp::open_local_machine(path)
    }
}
