//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

/// Supported item encryption algorithms
///
/// Every item shares one IV between its name and value ciphertexts, so only
/// nonce-misuse-resistant AEADs belong here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherAlgorithm {
    #[default]
    #[serde(rename = "aes-256-gcm-siv")]
    Aes256GcmSiv,
}

impl CipherAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherAlgorithm::Aes256GcmSiv => "aes-256-gcm-siv",
        }
    }
}

impl std::fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
