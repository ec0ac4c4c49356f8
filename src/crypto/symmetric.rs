//! Passphrase-based symmetric encryption.
//!
//! Keys are derived from the passphrase with HKDF-SHA256 under fixed
//! salt/info strings (same passphrase, same key); data is sealed with
//! ChaCha20-Poly1305. The output layout is `nonce (12 bytes) ||
//! ciphertext (includes the 16-byte auth tag)`.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use hkdf::Hkdf;
use rand::rngs::OsRng;
use sha2::Sha256;
use thiserror::Error;

/// HKDF info string for passphrase-based key derivation.
const HKDF_INFO: &[u8] = b"SHADOWINK-V1-SYMMETRIC";

/// Salt for HKDF (fixed so the same passphrase derives the same key).
const HKDF_SALT: &[u8] = b"SHADOWINK-V1-SALT";

/// Nonce size for ChaCha20Poly1305.
const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size.
const TAG_SIZE: usize = 16;

/// Errors that can occur during symmetric encryption.
#[derive(Error, Debug)]
pub enum SymmetricError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid ciphertext: too short")]
    CiphertextTooShort,

    #[error("key derivation failed")]
    KeyDerivationFailed,
}

/// Derives a 256-bit symmetric key from a passphrase.
fn derive_key(passphrase: &str) -> Result<[u8; 32], SymmetricError> {
    let hk = Hkdf::<Sha256>::new(Some(HKDF_SALT), passphrase.as_bytes());
    let mut key = [0u8; 32];
    hk.expand(HKDF_INFO, &mut key)
        .map_err(|_| SymmetricError::KeyDerivationFailed)?;
    Ok(key)
}

/// Encrypts data with a passphrase.
pub fn encrypt_symmetric(plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>, SymmetricError> {
    let key = derive_key(passphrase)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::RngCore::fill_bytes(&mut OsRng, &mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let cipher = ChaCha20Poly1305::new_from_slice(&key)
        .map_err(|e| SymmetricError::EncryptionFailed(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| SymmetricError::EncryptionFailed(e.to_string()))?;

    let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    result.extend_from_slice(&nonce_bytes);
    result.extend_from_slice(&ciphertext);

    Ok(result)
}

/// Decrypts data produced by [`encrypt_symmetric`].
pub fn decrypt_symmetric(data: &[u8], passphrase: &str) -> Result<Vec<u8>, SymmetricError> {
    if data.len() < NONCE_SIZE + TAG_SIZE {
        return Err(SymmetricError::CiphertextTooShort);
    }

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_SIZE);
    let key = derive_key(passphrase)?;

    let cipher = ChaCha20Poly1305::new_from_slice(&key)
        .map_err(|e| SymmetricError::DecryptionFailed(e.to_string()))?;

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|e| SymmetricError::DecryptionFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let plaintext = b"the cargo arrives tuesday";
        let encrypted = encrypt_symmetric(plaintext, "my_secret_passphrase").unwrap();
        let decrypted = decrypt_symmetric(&encrypted, "my_secret_passphrase").unwrap();
        assert_eq!(plaintext.as_slice(), decrypted.as_slice());
    }

    #[test]
    fn test_wrong_passphrase_fails() {
        let encrypted = encrypt_symmetric(b"secret data", "correct").unwrap();
        assert!(decrypt_symmetric(&encrypted, "wrong").is_err());
    }

    #[test]
    fn test_empty_plaintext() {
        let encrypted = encrypt_symmetric(b"", "test").unwrap();
        let decrypted = decrypt_symmetric(&encrypted, "test").unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_ciphertext_too_short() {
        let result = decrypt_symmetric(&[0u8; 10], "test");
        assert!(matches!(result, Err(SymmetricError::CiphertextTooShort)));
    }

    #[test]
    fn test_nonce_makes_ciphertext_unique() {
        let a = encrypt_symmetric(b"same input", "same pass").unwrap();
        let b = encrypt_symmetric(b"same input", "same pass").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_deterministic_key_derivation() {
        assert_eq!(
            derive_key("passphrase").unwrap(),
            derive_key("passphrase").unwrap()
        );
    }
}
