//! Pure cryptographic operations — no I/O, no database
//!
//! All functions work exclusively on in-memory buffers. The item store only
//! sequences calls into this module; it never touches the AEAD directly.
mod cipher;
mod decrypt;
mod encrypt;
mod iv;
mod key;

pub use cipher::Cipher;
pub use decrypt::decrypt_field;
pub use encrypt::encrypt_field;
pub use iv::{generate_iv, iv_from_slice};
pub use key::{generate_user_key, user_key_from_slice, Key};
