use std::path::PathBuf;

use crate::config::app::{Crypto, Database, Features};
use crate::enums::CipherAlgorithm;

pub const CONFIG_ENV: &str = "ITEMSTORE_CONFIG";
pub const DB_PATH_ENV: &str = "ITEMSTORE_DB";
pub const DB_KEY_ENV: &str = "ITEMSTORE_DB_KEY";
pub const TEST_MODE_ENV: &str = "ITEMSTORE_TEST_MODE";

pub const DEFAULT_CONFIG_FILE: &str = "dev-config.toml";
pub const DEFAULT_DB_KEY: &str = "dev-item-db-key-2025";

pub fn default_db_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("encrypted-item-store")
        .join("items.db")
        .to_string_lossy()
        .into_owned()
}

pub fn default_db_key() -> String {
    DEFAULT_DB_KEY.into()
}

pub fn default_database() -> Database {
    Database {
        path: default_db_path(),
        key: default_db_key(),
    }
}

pub fn default_crypto() -> Crypto {
    Crypto {
        algorithm: CipherAlgorithm::default(),
    }
}

pub fn default_features() -> Features {
    Features { use_dev_keys: true }
}
