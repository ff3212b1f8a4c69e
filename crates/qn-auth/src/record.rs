//! Encoding of the persisted session record.
//!
//! The record is the JSON form of [`User`]. Anything that does not decode to
//! exactly that shape (older layouts, foreign data, truncated writes) is
//! reported as [`AuthError::StorageRead`].

use qn_core::entities::User;

use crate::error::AuthError;

/// Serialize a user into the stored record format.
///
/// # Errors
///
/// Returns `AuthError::StorageWrite` if serialization fails.
pub fn encode(user: &User) -> Result<String, AuthError> {
    serde_json::to_string(user)
        .map_err(|e| AuthError::StorageWrite(format!("encode session record: {e}")))
}

/// Parse a stored record.
///
/// # Errors
///
/// Returns `AuthError::StorageRead` if the record is not a valid user.
pub fn decode(raw: &str) -> Result<User, AuthError> {
    serde_json::from_str(raw.trim()).map_err(|e| AuthError::StorageRead(e.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use qn_core::enums::Role;

    use super::*;

    #[test]
    fn encode_then_decode_preserves_user() {
        let user = User::new("abc123xyz", "bob@example.com", "bob", Role::Student, Utc::now());
        let raw = encode(&user).expect("encode");
        assert_eq!(decode(&raw).expect("decode"), user);
    }

    #[test]
    fn decode_tolerates_surrounding_whitespace() {
        let raw = "  {\"id\":\"a\",\"email\":\"e@x\",\"name\":\"e\",\"role\":\"teacher\",\"createdAt\":\"2024-05-01T10:00:00Z\"}\n";
        assert!(decode(raw).is_ok());
    }

    #[test]
    fn decode_reports_storage_read_error() {
        let err = decode("{not json").unwrap_err();
        assert!(matches!(err, AuthError::StorageRead(_)));
        assert!(err.to_string().starts_with("stored session record is malformed"));
    }
}
