// tests/config_env_tests.rs
//! Environment overrides — kept in their own binary and serialized, since
//! env vars are process-wide.

use std::sync::{Mutex, MutexGuard};

use encrypted_item_store::config::{Config, DB_KEY_ENV, DB_PATH_ENV};
use encrypted_item_store::error::CoreError;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn release_config() -> Config {
    Config::from_toml_str(
        r#"
        [database]
        path = "from-file/items.db"
        key = "file-key"

        [features]
        use_dev_keys = false
        "#,
    )
    .unwrap()
}

#[test]
fn db_key_reads_env_when_dev_keys_are_off() {
    let _guard = env_guard();
    std::env::set_var(DB_KEY_ENV, "env-key");

    let key = release_config().db_key().unwrap();
    assert_eq!(key.expose_secret(), "env-key");

    std::env::remove_var(DB_KEY_ENV);
}

#[test]
fn db_key_without_env_is_config_error() {
    let _guard = env_guard();
    std::env::remove_var(DB_KEY_ENV);

    let result = release_config().db_key();
    assert!(matches!(result, Err(CoreError::Config(msg)) if msg.contains(DB_KEY_ENV)));
}

#[test]
fn dev_keys_ignore_env_key() {
    let _guard = env_guard();
    std::env::set_var(DB_KEY_ENV, "env-key");

    let mut conf = release_config();
    conf.features.use_dev_keys = true;
    assert_eq!(conf.db_key().unwrap().expose_secret(), "file-key");

    std::env::remove_var(DB_KEY_ENV);
}

#[test]
fn db_path_env_overrides_file_path() {
    let _guard = env_guard();
    let conf = release_config();

    std::env::remove_var(DB_PATH_ENV);
    assert_eq!(conf.db_path(), std::path::PathBuf::from("from-file/items.db"));

    std::env::set_var(DB_PATH_ENV, "/tmp/override/items.db");
    assert_eq!(conf.db_path(), std::path::PathBuf::from("/tmp/override/items.db"));

    std::env::remove_var(DB_PATH_ENV);
}
