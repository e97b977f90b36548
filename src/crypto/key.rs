//! Caller key construction
//!
//! Key management is the caller's business; these helpers only turn raw bytes
//! into the zeroizing key type and reject anything of the wrong size.

use crate::aliases::UserKey32;
use crate::consts::USER_KEY_LEN;
use crate::error::CryptoError;

pub type Key = UserKey32;

/// Generate a new random 256-bit item key
#[inline]
pub fn generate_user_key() -> Key {
    Key::random()
}

/// Wrap caller-held key bytes, failing on a length the cipher cannot use
pub fn user_key_from_slice(bytes: &[u8]) -> Result<Key, CryptoError> {
    let arr: [u8; USER_KEY_LEN] = bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
        expected: USER_KEY_LEN,
        actual: bytes.len(),
    })?;
    Ok(Key::new(arr))
}
