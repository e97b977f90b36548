//! Configuration system for encrypted-item-store
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Crypto, Database, Features};
pub use defaults::{CONFIG_ENV, DB_KEY_ENV, DB_PATH_ENV, TEST_MODE_ENV};

mod app;
mod defaults;
