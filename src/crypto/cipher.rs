//! The cipher utility handed to the item store
//!
//! Holds the configured algorithm as a plain value instead of reading a
//! process-wide constant.

use crate::aliases::{ItemIv12, PlainText, UserKey32};
use crate::enums::CipherAlgorithm;
use crate::error::CryptoError;

use super::{decrypt_field, encrypt_field, generate_iv};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cipher {
    algorithm: CipherAlgorithm,
}

impl Cipher {
    pub fn new(algorithm: CipherAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    pub fn generate_iv(&self) -> ItemIv12 {
        generate_iv()
    }

    pub fn encrypt(
        &self,
        key: &UserKey32,
        iv: &ItemIv12,
        field: &'static str,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        encrypt_field(self.algorithm, key, iv, field, plaintext)
    }

    pub fn decrypt(
        &self,
        key: &UserKey32,
        iv: &ItemIv12,
        field: &'static str,
        ciphertext: &[u8],
    ) -> Result<PlainText, CryptoError> {
        decrypt_field(self.algorithm, key, iv, field, ciphertext)
    }
}
