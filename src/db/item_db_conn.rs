// src/db/item_db_conn.rs
use std::{fs, path::Path};

use rusqlite::Connection;
use tracing::info;

use crate::aliases::DbKey;
use crate::consts::DB_KDF_ITERATIONS;
use crate::error::Result;

/// Open (or create) the SQLCipher item database and bring its schema up to date
pub fn open_item_db<P: AsRef<Path>>(db_path: P, key: &DbKey) -> Result<Connection> {
    let db_path = db_path.as_ref();

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path)?;

    // Must be the first statement on the connection
    let key = key.expose_secret().replace('\'', "''");
    conn.execute_batch(&format!("PRAGMA key = '{key}';"))?;
    conn.execute_batch(&format!(
        r#"
        PRAGMA cipher_page_size = 4096;
        PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
        PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
        PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
        PRAGMA cipher_plaintext_header_size = 0;
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS secrets (
            id TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS items (
            id TEXT PRIMARY KEY,
            secret_id TEXT NOT NULL REFERENCES secrets(id),
            iv TEXT NOT NULL,
            encrypted_name TEXT NOT NULL,
            encrypted_value TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_items_secret_id ON items(secret_id);
        CREATE INDEX IF NOT EXISTS idx_items_created_at ON items(created_at);
        "#
    ))?;

    info!(path = %db_path.display(), "opened item database");
    Ok(conn)
}

/// Open the item database named by the global config
pub fn open_default_item_db() -> Result<Connection> {
    let config = crate::config::load()?;
    let key = config.db_key()?;
    open_item_db(config.db_path(), &key)
}
