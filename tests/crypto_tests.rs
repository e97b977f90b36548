// tests/crypto_tests.rs
use encrypted_item_store::consts::{IV_LEN, TAG_LEN, USER_KEY_LEN};
use encrypted_item_store::crypto::*;
use encrypted_item_store::enums::CipherAlgorithm;
use encrypted_item_store::error::CryptoError;

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    let cipher = Cipher::default();
    let key = generate_user_key();
    let iv = cipher.generate_iv();

    let ciphertext = cipher.encrypt(&key, &iv, "value", b"Attack at dawn!").unwrap();
    let decrypted = cipher.decrypt(&key, &iv, "value", &ciphertext).unwrap();

    assert_eq!(ciphertext.len(), b"Attack at dawn!".len() + TAG_LEN);
    assert_eq!(decrypted.expose_secret().as_slice(), b"Attack at dawn!");
}

#[test]
fn test_default_algorithm_is_gcm_siv() {
    assert_eq!(Cipher::default().algorithm(), CipherAlgorithm::Aes256GcmSiv);
    assert_eq!(CipherAlgorithm::Aes256GcmSiv.to_string(), "aes-256-gcm-siv");
}

#[test]
fn test_generate_iv_is_random() {
    let a = generate_iv();
    let b = generate_iv();
    assert_eq!(a.expose_secret().len(), IV_LEN);
    assert_ne!(a.expose_secret(), b.expose_secret());
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    let cipher = Cipher::default();
    let iv = generate_iv();
    let ciphertext = cipher
        .encrypt(&generate_user_key(), &iv, "name", b"secret")
        .unwrap();

    let wrong = cipher.decrypt(&generate_user_key(), &iv, "name", &ciphertext);
    assert!(matches!(wrong, Err(CryptoError::Decrypt { field: "name" })));
}

#[test]
fn test_decrypt_fails_under_other_field_label() {
    let cipher = Cipher::default();
    let key = generate_user_key();
    let iv = generate_iv();
    let ciphertext = cipher.encrypt(&key, &iv, "name", b"secret").unwrap();

    assert!(cipher.decrypt(&key, &iv, "value", &ciphertext).is_err());
}

#[test]
fn test_decrypt_fails_with_wrong_iv() {
    let cipher = Cipher::default();
    let key = generate_user_key();
    let ciphertext = cipher
        .encrypt(&key, &generate_iv(), "name", b"secret")
        .unwrap();

    assert!(cipher
        .decrypt(&key, &generate_iv(), "name", &ciphertext)
        .is_err());
}

#[test]
fn test_shared_iv_keeps_distinct_plaintexts_distinct() {
    let cipher = Cipher::default();
    let key = generate_user_key();
    let iv = generate_iv();

    let name = cipher.encrypt(&key, &iv, "name", b"same").unwrap();
    let value = cipher.encrypt(&key, &iv, "value", b"same").unwrap();

    // Field labels are associated data, so even equal plaintexts diverge
    assert_ne!(name, value);
}

#[test]
fn test_user_key_from_slice_checks_length() {
    let key = user_key_from_slice(&[7u8; USER_KEY_LEN]).unwrap();
    assert_eq!(key.expose_secret(), &[7u8; USER_KEY_LEN]);

    let short = user_key_from_slice(&[0u8; 16]);
    assert!(matches!(
        short,
        Err(CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 16
        })
    ));
}

#[test]
fn test_iv_from_slice_checks_length() {
    assert!(iv_from_slice(&[1u8; IV_LEN]).is_ok());
    assert!(matches!(
        iv_from_slice(&[1u8; 16]),
        Err(CryptoError::InvalidIvLength {
            expected: 12,
            actual: 16
        })
    ));
}

#[test]
fn test_plaintext_moves_out_without_copy_and_secrets_stay_redacted() {
    let cipher = Cipher::default();
    let key = generate_user_key();
    let iv = cipher.generate_iv();
    let ciphertext = cipher.encrypt(&key, &iv, "value", b"sk-123").unwrap();

    let plaintext = cipher.decrypt(&key, &iv, "value", &ciphertext).unwrap();
    assert_eq!(format!("{plaintext:?}"), "[REDACTED]");
    assert_eq!(plaintext.into_inner(), b"sk-123".to_vec());

    assert_eq!(format!("{key:?}"), "[REDACTED]");
    assert_eq!(format!("{iv:?}"), "[REDACTED]");
}
