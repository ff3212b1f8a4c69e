use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("stored session record is malformed: {0}")]
    StorageRead(String),

    #[error("session storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("failed to write session storage: {0}")]
    StorageWrite(String),

    #[error("auth transport error: {0}")]
    Transport(String),

    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("{0}")]
    Other(String),
}

impl From<qn_core::errors::CoreError> for AuthError {
    fn from(error: qn_core::errors::CoreError) -> Self {
        Self::Other(error.to_string())
    }
}
