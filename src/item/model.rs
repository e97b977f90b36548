//! Item record shapes
//!
//! `Item` is what the document store hands back; `NewItem` is what the item
//! store asks it to persist. Both only ever carry ciphertext.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::RECORD_ID_BYTES;
use crate::error::{CoreError, Result};

/// Store-assigned identifier: 12 random bytes as 24 lowercase hex chars
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(hex::encode(rand::random::<[u8; RECORD_ID_BYTES]>()))
    }

    /// Validate caller input; an empty string counts as a missing id
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CoreError::Validation("id is required".into()));
        }
        let bytes = hex::decode(raw)
            .map_err(|e| CoreError::Validation(format!("malformed id {raw:?}: {e}")))?;
        if bytes.len() != RECORD_ID_BYTES {
            return Err(CoreError::Validation(format!(
                "malformed id {raw:?}: expected {} hex chars",
                RECORD_ID_BYTES * 2
            )));
        }
        Ok(Self(hex::encode(bytes)))
    }

    pub(crate) fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The three base64 text fields needed to recover an item's plaintext
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedFields {
    pub iv: String,
    pub encrypted_name: String,
    pub encrypted_value: String,
}

impl AsRef<EncryptedFields> for EncryptedFields {
    fn as_ref(&self) -> &EncryptedFields {
        self
    }
}

/// Fields handed to `DocumentStore::create_record`
///
/// `secret_id` is raw caller input; the store validates it.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub secret_id: String,
    pub encrypted: EncryptedFields,
}

/// A persisted, still-encrypted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: RecordId,
    #[serde(rename = "secretId")]
    secret: RecordId,
    #[serde(flatten)]
    encrypted: EncryptedFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(
        id: RecordId,
        secret: RecordId,
        encrypted: EncryptedFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            secret,
            encrypted,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn secret_id(&self) -> &str {
        self.secret.as_str()
    }

    pub fn record_id(&self) -> &RecordId {
        &self.id
    }

    pub fn iv(&self) -> &str {
        &self.encrypted.iv
    }

    pub fn encrypted_name(&self) -> &str {
        &self.encrypted.encrypted_name
    }

    pub fn encrypted_value(&self) -> &str {
        &self.encrypted.encrypted_value
    }

    pub fn encrypted(&self) -> &EncryptedFields {
        &self.encrypted
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AsRef<EncryptedFields> for Item {
    fn as_ref(&self) -> &EncryptedFields {
        &self.encrypted
    }
}

/// Recovered plaintext pair
#[derive(Clone, PartialEq, Eq)]
pub struct DecryptedItem {
    pub name: String,
    pub value: String,
}

// Values are secrets; keep them out of logs and panic messages.
impl fmt::Debug for DecryptedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptedItem")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}
