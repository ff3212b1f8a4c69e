//! # qn-config
//!
//! Layered configuration loading for Quest Nexus using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QN_*` prefix, `__` as separator)
//! 2. Project-level `.quest-nexus/config.toml`
//! 3. User-level `~/.config/quest-nexus/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QN_SESSION__BACKEND` -> `session.backend`,
//! `QN_AUTH__MOCK_DELAY_MS` -> `auth.mock_delay_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use qn_config::QnConfig;
//!
//! let config = QnConfig::load_with_dotenv().expect("config");
//! println!("session stored under '{}'", config.session.storage_key);
//! ```

mod auth;
mod error;
mod session;

pub use auth::{AuthConfig, TransportKind};
pub use error::ConfigError;
pub use session::{DEFAULT_KEYRING_SERVICE, DEFAULT_STORAGE_KEY, SessionConfig, StorageBackend};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local configuration file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".quest-nexus/config.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "QN_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QnConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl QnConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the result does not validate.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the result does not validate.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Cross-section checks that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unusable storage key or an
    /// http transport without a base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;

        if !self.auth.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "auth.base_url".into(),
                reason: "required when auth.transport = \"http\"".into(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quest-nexus").join("config.toml"))
    }
}
