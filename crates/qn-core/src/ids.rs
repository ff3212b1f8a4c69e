//! Opaque identifier generation.

use crate::errors::CoreError;

/// Length of a generated user id.
pub const USER_ID_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are redrawn so every character is equally likely.
const ACCEPT_BELOW: u8 = 252;

/// Generate a random lowercase base-36 token of `len` characters.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn random_token(len: usize) -> Result<String, CoreError> {
    let mut token = String::with_capacity(len);
    let mut bytes = vec![0u8; len];
    while token.len() < len {
        getrandom::fill(&mut bytes)
            .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
        let missing = len - token.len();
        token.extend(accepted_chars(&bytes).take(missing));
    }
    Ok(token)
}

fn accepted_chars(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
    bytes
        .iter()
        .filter(|b| **b < ACCEPT_BELOW)
        .map(|b| char::from(ALPHABET[usize::from(*b) % ALPHABET.len()]))
}

/// Generate a user id.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn new_user_id() -> Result<String, CoreError> {
    random_token(USER_ID_LEN)
}
