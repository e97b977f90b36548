// tests/config_tests.rs
use encrypted_item_store::config::Config;
use encrypted_item_store::enums::CipherAlgorithm;
use encrypted_item_store::error::CoreError;
use encrypted_item_store::{Cipher, ItemStore, SqliteDocumentStore};

#[test]
fn parses_full_config() {
    let conf = Config::from_toml_str(
        r#"
        [database]
        path = "data/items.db"
        key = "file-key"

        [crypto]
        algorithm = "aes-256-gcm-siv"

        [features]
        use_dev_keys = true
        "#,
    )
    .unwrap();

    assert_eq!(conf.database.path, "data/items.db");
    assert_eq!(conf.crypto.algorithm, CipherAlgorithm::Aes256GcmSiv);
    assert!(conf.features.use_dev_keys);
    assert_eq!(conf.db_key().unwrap().expose_secret(), "file-key");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let conf = Config::from_toml_str("").unwrap();

    assert!(conf.database.path.ends_with("items.db"));
    assert_eq!(conf.crypto.algorithm, CipherAlgorithm::default());
    assert!(conf.features.use_dev_keys);
    assert!(!conf.database.key.is_empty());
}

#[test]
fn unknown_algorithm_is_config_error() {
    let result = Config::from_toml_str(
        r#"
        [crypto]
        algorithm = "rot13"
        "#,
    );
    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn loads_from_file_and_configures_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("items.db");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[database]\npath = {:?}\nkey = \"k\"\n",
            db_path.to_string_lossy()
        ),
    )
    .unwrap();

    let conf = Config::from_file(&config_path).unwrap();
    let docs = SqliteDocumentStore::open(&conf.database.path, &conf.db_key().unwrap()).unwrap();
    let store = ItemStore::with_config(docs, &conf);

    assert_eq!(*store.cipher(), Cipher::new(conf.crypto.algorithm));
    assert!(db_path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let result = Config::from_file("/definitely/not/here.toml");
    assert!(matches!(result, Err(CoreError::Io(_))));
}
