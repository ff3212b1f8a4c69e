//! Durable key-value storage for the session record.
//!
//! Three backends share the [`KeyValueStore`] contract:
//! - [`FileStore`]: one file per key (`0600`, directory `0700` on Unix)
//! - [`KeyringStore`]: a [`Keychain`] (the OS one by default), falls back to
//!   a [`FileStore`]
//! - [`MemoryStore`]: process memory, clones share the same map

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::AuthError;

/// Minimal string key-value contract used by the session store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Absent keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StorageUnavailable` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StorageWrite` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove a value. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StorageWrite` if an existing value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), AuthError>;

    /// Short backend name for status output.
    fn kind(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::StorageWrite(format!("mkdir {}: {e}", self.dir.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::StorageUnavailable(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| AuthError::StorageWrite(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::StorageWrite(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::StorageWrite(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

// ---------------------------------------------------------------------------
// KeyringStore
// ---------------------------------------------------------------------------

/// Secret backend behind [`KeyringStore`]. [`OsKeychain`] in production.
pub trait Keychain: Send + Sync + fmt::Debug {
    fn read(&self, key: &str) -> keyring::Result<String>;
    fn write(&self, key: &str, value: &str) -> keyring::Result<()>;
    fn delete(&self, key: &str) -> keyring::Result<()>;
}

/// The platform keychain. Each key is a keychain user under one service name.
#[derive(Debug, Clone)]
pub struct OsKeychain {
    service: String,
}

impl OsKeychain {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> keyring::Result<keyring::Entry> {
        keyring::Entry::new(&self.service, key)
    }
}

impl Keychain for OsKeychain {
    fn read(&self, key: &str) -> keyring::Result<String> {
        self.entry(key)?.get_password()
    }

    fn write(&self, key: &str, value: &str) -> keyring::Result<()> {
        self.entry(key)?.set_password(value)
    }

    fn delete(&self, key: &str) -> keyring::Result<()> {
        self.entry(key)?.delete_credential()
    }
}

/// Keychain storage with a [`FileStore`] fallback.
///
/// Reads prefer the keychain, so every write and removal must leave the
/// keychain either holding the latest value or holding nothing.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    keychain: Arc<dyn Keychain>,
    fallback: FileStore,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>, fallback: FileStore) -> Self {
        Self::with_keychain(Arc::new(OsKeychain::new(service)), fallback)
    }

    #[must_use]
    pub fn with_keychain(keychain: Arc<dyn Keychain>, fallback: FileStore) -> Self {
        Self { keychain, fallback }
    }

    /// True if the keychain still yields a value for `key`.
    fn keychain_holds(&self, key: &str) -> bool {
        matches!(self.keychain.read(key), Ok(value) if !value.trim().is_empty())
    }

    /// Delete the keychain entry, failing only if a readable value survives.
    fn clear_keychain(&self, key: &str) -> Result<(), AuthError> {
        match self.keychain.delete(key) {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) if self.keychain_holds(key) => Err(AuthError::StorageWrite(format!(
                "keychain entry {key} could not be deleted: {error}"
            ))),
            Err(error) => {
                tracing::debug!(%error, "keychain delete failed; nothing readable remains");
                Ok(())
            }
        }
    }
}

impl KeyValueStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        match self.keychain.read(key) {
            Ok(value) if !value.trim().is_empty() => return Ok(Some(value)),
            Ok(_) | Err(keyring::Error::NoEntry) => {}
            Err(error) => tracing::debug!(%error, "keychain unreadable; using file"),
        }

        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        match self.keychain.write(key, value) {
            Ok(()) => {
                if let Err(error) = self.fallback.remove(key) {
                    tracing::warn!(%error, "stale file copy left behind");
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "keychain store failed; falling back to file");
                // An older keychain value would shadow the file on the next read.
                self.clear_keychain(key)?;
                self.fallback.set(key, value)
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let keychain = self.clear_keychain(key);
        self.fallback.remove(key)?;
        keychain
    }

    fn kind(&self) -> &'static str {
        "keyring"
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Clones share the same underlying map, which lets tests
/// hand one clone to a session store and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AuthError> {
        self.entries
            .lock()
            .map_err(|_| AuthError::StorageUnavailable("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
