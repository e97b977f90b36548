//! Zeroizing secret types
//!
//! These are the canonical types used throughout encrypted-item-store. Every
//! one of them wipes its buffer on drop and prints as `[REDACTED]`.

use rand::RngCore;
use zeroize::Zeroizing;

macro_rules! fixed_alias {
    ($name:ident, $len:literal) => {
        pub struct $name(Zeroizing<[u8; $len]>);

        impl $name {
            pub fn new(bytes: [u8; $len]) -> Self {
                Self(Zeroizing::new(bytes))
            }

            /// Fresh bytes from the thread-local CSPRNG
            pub fn random() -> Self {
                let mut bytes = Zeroizing::new([0u8; $len]);
                rand::rng().fill_bytes(bytes.as_mut_slice());
                Self(bytes)
            }

            pub fn expose_secret(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("[REDACTED]")
            }
        }
    };
}

macro_rules! dynamic_alias {
    ($name:ident, $ty:ty) => {
        pub struct $name(Zeroizing<$ty>);

        impl $name {
            pub fn new(value: $ty) -> Self {
                Self(Zeroizing::new(value))
            }

            pub fn expose_secret(&self) -> &$ty {
                &self.0
            }

            /// Move the contents out; the emptied buffer is still wiped on drop
            pub fn into_inner(mut self) -> $ty {
                std::mem::take(&mut *self.0)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("[REDACTED]")
            }
        }
    };
}

// Fixed-size secrets
fixed_alias!(UserKey32, 32); // 256-bit per-user item key, supplied by the caller
fixed_alias!(ItemIv12, 12); // 96-bit per-item IV

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>); // Decrypted field bytes, zeroized on drop
dynamic_alias!(DbKey, String); // SQLCipher database passphrase
