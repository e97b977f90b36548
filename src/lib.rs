// src/lib.rs
//! encrypted-item-store — encryption-at-rest for secret items
//!
//! Features:
//! - AES-256-GCM-SIV per-item encryption with caller-held keys
//! - One random IV per item, bound field labels
//! - SQLCipher-backed document store with referential integrity
//! - Zeroizing key, IV and plaintext buffers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod enums;
pub mod error;
pub mod export;
pub mod item;

// Re-export everything users need at the crate root
pub use aliases::{DbKey, ItemIv12, UserKey32};
pub use config::{load as load_config, Config};
pub use crypto::{generate_user_key, user_key_from_slice, Cipher};
pub use db::{DocumentStore, ItemFilter, SqliteDocumentStore};
pub use enums::CipherAlgorithm;
pub use error::{CoreError, CryptoError, DecodeError, Result as CoreResult};
pub use export::export_items_to_json;
pub use item::{DecryptedItem, EncryptedFields, Item, ItemQuery, ItemStore, NewItem, RecordId};
