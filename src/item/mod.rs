//! Encrypted item store
//!
//! Encrypt → persist on the way in, fetch → decrypt on the way out. The store
//! never sees plaintext and never holds the caller's key between calls.

mod model;
mod query;

pub use model::{DecryptedItem, EncryptedFields, Item, NewItem, RecordId};
pub use query::ItemQuery;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::aliases::{PlainText, UserKey32};
use crate::config::Config;
use crate::consts::{FIELD_NAME, FIELD_VALUE};
use crate::crypto::{iv_from_slice, Cipher};
use crate::db::{DocumentStore, ItemFilter};
use crate::error::{CryptoError, DecodeError, Result};

pub struct ItemStore<S> {
    store: S,
    cipher: Cipher,
}

impl<S: DocumentStore> ItemStore<S> {
    pub fn new(store: S, cipher: Cipher) -> Self {
        Self { store, cipher }
    }

    /// Use the algorithm named in `[crypto]` of the given config
    pub fn with_config(store: S, config: &Config) -> Self {
        Self::new(store, Cipher::new(config.crypto.algorithm))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    /// Encrypt `name` and `value` under one fresh IV and persist the result
    pub fn create(
        &self,
        name: &str,
        value: &str,
        secret_id: &str,
        user_key: &UserKey32,
    ) -> Result<Item> {
        let iv = self.cipher.generate_iv();

        let encrypted_name = self
            .cipher
            .encrypt(user_key, &iv, FIELD_NAME, name.as_bytes())?;
        let encrypted_value = self
            .cipher
            .encrypt(user_key, &iv, FIELD_VALUE, value.as_bytes())?;

        let item = self.store.create_record(NewItem {
            secret_id: secret_id.to_owned(),
            encrypted: EncryptedFields {
                iv: STANDARD.encode(iv.expose_secret()),
                encrypted_name: STANDARD.encode(encrypted_name),
                encrypted_value: STANDARD.encode(encrypted_value),
            },
        })?;

        debug!(
            item_id = %item.id(),
            secret_id = %item.secret_id(),
            algorithm = %self.cipher.algorithm(),
            "created encrypted item"
        );
        Ok(item)
    }

    /// Pass-through query; ciphertext comes back exactly as stored
    pub fn find(&self, filter: ItemFilter) -> ItemQuery<'_, S> {
        ItemQuery::new(&self.store, filter)
    }

    /// Recover `{name, value}` from a stored record with the key it was created under
    ///
    /// The returned strings are ordinary heap allocations; clearing them once
    /// they are no longer needed is up to the caller.
    pub fn decrypt<R: AsRef<EncryptedFields>>(
        &self,
        record: &R,
        user_key: &UserKey32,
    ) -> Result<DecryptedItem> {
        let record = record.as_ref();

        let iv = iv_from_slice(&decode_base64("iv", &record.iv)?)?;
        let encrypted_name = decode_base64("encryptedName", &record.encrypted_name)?;
        let encrypted_value = decode_base64("encryptedValue", &record.encrypted_value)?;

        let name = self
            .cipher
            .decrypt(user_key, &iv, FIELD_NAME, &encrypted_name)
            .inspect_err(log_auth_failure)?;
        let value = self
            .cipher
            .decrypt(user_key, &iv, FIELD_VALUE, &encrypted_value)
            .inspect_err(log_auth_failure)?;

        Ok(DecryptedItem {
            name: decode_utf8(FIELD_NAME, name)?,
            value: decode_utf8(FIELD_VALUE, value)?,
        })
    }
}

fn decode_base64(field: &'static str, text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|source| DecodeError::Base64 { field, source }.into())
}

// Takes the buffer instead of copying it, so no second plaintext copy is left behind
fn decode_utf8(field: &'static str, plaintext: PlainText) -> Result<String> {
    String::from_utf8(plaintext.into_inner())
        .map_err(|source| DecodeError::Utf8 { field, source }.into())
}

fn log_auth_failure(err: &CryptoError) {
    warn!(error = %err, "item decryption rejected");
}
