//! Registry (configuration store) port.
//!
//! Keys are scoped resources. Implementations release the underlying
//! handle when the boxed key is dropped, so callers get guaranteed release
//! on every exit path simply by letting keys go out of scope.

/// An open registry key.
pub trait RegistryKey {
    /// Names of the immediate subkeys, in whatever order the store reports them.
    fn sub_key_names(&self) -> Vec<String>;

    /// Open an immediate subkey, or `None` if it does not exist or cannot be opened.
    fn open_sub_key(&self, name: &str) -> Option<Box<dyn RegistryKey>>;

    /// Read a string value, or `None` if it is missing or not a string.
    fn value(&self, name: &str) -> Option<String>;
}

/// Access to the local-machine hive.
pub trait Registry: Send + Sync {
    /// Open a key below `HKEY_LOCAL_MACHINE`, or `None` if it is absent.
    fn open_local_machine(&self, path: &str) -> Option<Box<dyn RegistryKey>>;
}
