//! Cross-cutting error types for Quest Nexus.
//!
//! Domain-specific errors (`AuthError`, `ConfigError`) live in their own
//! crates. `qn-cli` converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Quest Nexus crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, required fields, enum values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
