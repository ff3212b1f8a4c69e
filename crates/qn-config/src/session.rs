//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default storage key for the persisted user record.
pub const DEFAULT_STORAGE_KEY: &str = "quest-nexus-user";

/// Default keychain service name.
pub const DEFAULT_KEYRING_SERVICE: &str = "quest-nexus";

/// Directory under `$HOME` used when `storage_dir` is empty.
const DEFAULT_STORAGE_DIR_NAME: &str = ".quest-nexus";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_keyring_service() -> String {
    DEFAULT_KEYRING_SERVICE.to_string()
}

/// Where the session record is kept between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One file per key under `storage_dir`.
    #[default]
    File,
    /// OS keychain, falling back to the file backend.
    Keyring,
    /// Process memory only; nothing survives a restart.
    Memory,
}

impl StorageBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Keyring => "keyring",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Storage backend for the persisted user record.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Key under which the serialized user is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory for the file backend. Empty means `~/.quest-nexus`.
    #[serde(default)]
    pub storage_dir: String,

    /// Keychain service name for the keyring backend.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            storage_key: default_storage_key(),
            storage_dir: String::new(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl SessionConfig {
    /// Resolve the file backend directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `storage_dir` is empty and no
    /// home directory can be determined.
    pub fn resolved_storage_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.storage_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.storage_dir.trim()));
        }

        dirs::home_dir()
            .map(|home| home.join(DEFAULT_STORAGE_DIR_NAME))
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "session.storage_dir".into(),
            })
    }

    /// The storage key as used by the session store, without surrounding
    /// whitespace.
    #[must_use]
    pub fn key(&self) -> &str {
        self.storage_key.trim()
    }

    /// Check that the storage key is usable as a file name and keychain user.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty key or one containing
    /// path separators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.key();
        if key.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.storage_key".into(),
                reason: "must not be empty".into(),
            });
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ConfigError::InvalidValue {
                field: "session.storage_key".into(),
                reason: format!("'{key}' is not a valid storage key"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SessionConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.storage_key, "quest-nexus-user");
        assert!(config.storage_dir.is_empty());
        assert_eq!(config.keyring_service, "quest-nexus");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_storage_dir_wins() {
        let config = SessionConfig {
            storage_dir: "/tmp/qn-store".into(),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_storage_dir().expect("dir"),
            PathBuf::from("/tmp/qn-store")
        );
    }

    #[test]
    fn empty_storage_key_is_invalid() {
        let config = SessionConfig {
            storage_key: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("session.storage_key"));
    }

    #[test]
    fn padded_storage_key_is_used_trimmed() {
        let config = SessionConfig {
            storage_key: " quest-nexus-user \n".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.key(), "quest-nexus-user");
    }

    #[test]
    fn storage_key_with_separator_is_invalid() {
        let config = SessionConfig {
            storage_key: "../escape".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
