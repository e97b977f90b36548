use aes_gcm_siv::aead::{Aead, KeyInit, Payload};
use aes_gcm_siv::{Aes256GcmSiv, Nonce};

use crate::aliases::{ItemIv12, UserKey32};
use crate::consts::USER_KEY_LEN;
use crate::enums::CipherAlgorithm;
use crate::error::CryptoError;

/// Encrypt one field → ciphertext || tag (in-memory)
///
/// `field` is bound as associated data, so a ciphertext only authenticates
/// under the field label it was written for.
pub fn encrypt_field(
    algorithm: CipherAlgorithm,
    key: &UserKey32,
    iv: &ItemIv12,
    field: &'static str,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match algorithm {
        CipherAlgorithm::Aes256GcmSiv => {
            let cipher = Aes256GcmSiv::new_from_slice(key.expose_secret()).map_err(|_| {
                CryptoError::InvalidKeyLength {
                    expected: USER_KEY_LEN,
                    actual: key.expose_secret().len(),
                }
            })?;
            cipher
                .encrypt(
                    Nonce::from_slice(iv.expose_secret()),
                    Payload {
                        msg: plaintext,
                        aad: field.as_bytes(),
                    },
                )
                .map_err(|_| CryptoError::Encrypt { field })
        }
    }
}
