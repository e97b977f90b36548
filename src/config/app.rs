use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::aliases::DbKey;
use crate::enums::CipherAlgorithm;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: Database,
    #[serde(default = "default_crypto")]
    pub crypto: Crypto,
    #[serde(default = "default_features")]
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_db_key")]
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Crypto {
    #[serde(default)]
    pub algorithm: CipherAlgorithm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub use_dev_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            crypto: default_crypto(),
            features: default_features(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// `ITEMSTORE_DB` wins over `database.path`
    pub fn db_path(&self) -> PathBuf {
        std::env::var(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&self.database.path))
    }

    /// Dev key from the file, or `ITEMSTORE_DB_KEY` once dev keys are off
    pub fn db_key(&self) -> Result<DbKey> {
        if self.features.use_dev_keys {
            return Ok(DbKey::new(self.database.key.clone()));
        }
        std::env::var(DB_KEY_ENV)
            .map(DbKey::new)
            .map_err(|_| CoreError::Config(format!("{DB_KEY_ENV} required")))
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once — falls back to built-in defaults if the file is missing
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        Config::from_file(&config_path)?
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };

    // Test mode override
    if std::env::var(TEST_MODE_ENV).is_ok() {
        conf.features.use_dev_keys = false;
    }

    Ok(CONFIG.get_or_init(|| conf))
}
