//! Authentication transport configuration.

use serde::{Deserialize, Serialize};

/// Simulated round trip of the mock transport, in milliseconds.
const fn default_mock_delay_ms() -> u64 {
    1000
}

/// HTTP request timeout, in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Which authentication transport backs login and register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Accept any credentials after a fixed delay.
    #[default]
    Mock,
    /// POST credentials to an authentication service.
    Http,
}

impl TransportKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Http => "http",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub transport: TransportKind,

    /// Delay applied by the mock transport before answering.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,

    /// Base URL of the authentication service (http transport only).
    #[serde(default)]
    pub base_url: String,

    /// Request timeout for the http transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            mock_delay_ms: default_mock_delay_ms(),
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AuthConfig {
    /// Check if the selected transport has what it needs to run.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        match self.transport {
            TransportKind::Mock => true,
            TransportKind::Http => !self.base_url.trim().is_empty(),
        }
    }

    #[must_use]
    pub const fn mock_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.mock_delay_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
