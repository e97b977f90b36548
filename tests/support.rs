// tests/support.rs
//! Test utilities — throwaway SQLCipher item databases

use encrypted_item_store::{Cipher, DbKey, ItemStore, SqliteDocumentStore};
use std::path::Path;
use tempfile::TempDir;

pub const TEST_DB_KEY: &str = "test-item-db-key-2025";

// `store` is declared first so the connection closes before the directory goes
pub struct TestDb {
    pub store: ItemStore<SqliteDocumentStore>,
    dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let docs = SqliteDocumentStore::open(
            dir.path().join("items.db"),
            &DbKey::new(TEST_DB_KEY.to_string()),
        )
        .expect("open item db");

        Self {
            store: ItemStore::new(docs, Cipher::default()),
            dir,
        }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Register a parent secret and return its id
    pub fn secret(&self) -> String {
        self.store
            .store()
            .create_secret()
            .expect("create secret")
            .to_string()
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}
