use aes_gcm_siv::aead::{Aead, KeyInit, Payload};
use aes_gcm_siv::{Aes256GcmSiv, Nonce};

use crate::aliases::{ItemIv12, PlainText, UserKey32};
use crate::consts::USER_KEY_LEN;
use crate::enums::CipherAlgorithm;
use crate::error::CryptoError;

/// Decrypt one field → plaintext (in-memory)
///
/// Fails closed: a wrong key, a flipped bit, a truncated buffer or a field
/// label mismatch all yield `CryptoError::Decrypt` and no bytes.
pub fn decrypt_field(
    algorithm: CipherAlgorithm,
    key: &UserKey32,
    iv: &ItemIv12,
    field: &'static str,
    ciphertext: &[u8],
) -> Result<PlainText, CryptoError> {
    match algorithm {
        CipherAlgorithm::Aes256GcmSiv => {
            let cipher = Aes256GcmSiv::new_from_slice(key.expose_secret()).map_err(|_| {
                CryptoError::InvalidKeyLength {
                    expected: USER_KEY_LEN,
                    actual: key.expose_secret().len(),
                }
            })?;
            let out = cipher
                .decrypt(
                    Nonce::from_slice(iv.expose_secret()),
                    Payload {
                        msg: ciphertext,
                        aad: field.as_bytes(),
                    },
                )
                .map_err(|_| CryptoError::Decrypt { field })?;
            Ok(PlainText::new(out))
        }
    }
}
