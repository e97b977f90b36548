//! Shared constants — security parameters and defaults

/// Recommended KDF iterations for SQLCipher databases (2025+)
// ~0.1–0.2s on modern hardware — good default
pub const DB_KDF_ITERATIONS: u32 = 256_000;

/// Length of a caller-supplied item key in bytes
pub const USER_KEY_LEN: usize = 32;

/// Length of a per-item IV in bytes (96-bit nonce)
pub const IV_LEN: usize = 12;

/// Length of the authentication tag appended to every ciphertext
pub const TAG_LEN: usize = 16;

/// Number of random bytes in a record identifier (rendered as hex)
pub const RECORD_ID_BYTES: usize = 12;

/// Associated data binding a ciphertext to the `encryptedName` field
pub const FIELD_NAME: &str = "name";

/// Associated data binding a ciphertext to the `encryptedValue` field
pub const FIELD_VALUE: &str = "value";

/// Identifier written into every JSON export
pub const EXPORT_FORMAT: &str = "encrypted-item-store-v1";
