//! Cryptographic collaborator for the steganography pipeline.
//!
//! The channels themselves only move bits; confidentiality comes from
//! encrypting the secret before it is embedded. This module provides
//! passphrase-based authenticated encryption (HKDF-SHA256 key derivation,
//! ChaCha20-Poly1305 AEAD) plus a base64 text armor so ciphertext can
//! travel through the text-only channels.

pub mod symmetric;

pub use symmetric::{decrypt_symmetric, encrypt_symmetric, SymmetricError};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use thiserror::Error;

/// Errors that can occur in the text-armored encryption layer.
#[derive(Error, Debug)]
pub enum EncryptionError {
    #[error("symmetric encryption error: {0}")]
    Symmetric(#[from] SymmetricError),

    #[error("ciphertext is not valid base64")]
    InvalidCiphertext,

    #[error("decrypted data is not valid UTF-8 text")]
    InvalidPlaintext,
}

/// Encrypts text with a passphrase, returning base64-armored ciphertext.
pub fn encrypt_text(plaintext: &str, passphrase: &str) -> Result<String, EncryptionError> {
    let encrypted = encrypt_symmetric(plaintext.as_bytes(), passphrase)?;
    Ok(BASE64.encode(encrypted))
}

/// Decrypts base64-armored ciphertext produced by [`encrypt_text`].
///
/// A wrong passphrase fails AEAD authentication and surfaces as a
/// [`SymmetricError`]; it never yields garbage plaintext.
pub fn decrypt_text(ciphertext: &str, passphrase: &str) -> Result<String, EncryptionError> {
    let data = BASE64
        .decode(ciphertext.trim())
        .map_err(|_| EncryptionError::InvalidCiphertext)?;
    let plaintext = decrypt_symmetric(&data, passphrase)?;
    String::from_utf8(plaintext).map_err(|_| EncryptionError::InvalidPlaintext)
}
