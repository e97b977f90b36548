//! Export utilities for encrypted-item-store
//!
//! Exports carry ciphertext only; decrypting them still needs each user's key.

pub use json::export_items_to_json;

pub mod json;
