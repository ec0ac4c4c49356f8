//! Vigenère cipher: polyalphabetic shift keyed by a word.

use super::{CipherError, Mode};

/// Applies the Vigenère cipher with an alphabetic key.
///
/// The key is sanitized to its ASCII letters (case-insensitive); if none
/// remain the call fails with [`CipherError::EmptyKey`]. The key index
/// advances only on alphabetic plaintext characters, so punctuation and
/// whitespace neither consume key material nor change.
pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    let key: Vec<u8> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();

    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let mut key_index = 0usize;
    let result = text
        .chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };

            let k = key[key_index % key.len()];
            key_index += 1;

            let pos = c as u8 - base;
            let shifted = match mode {
                Mode::Encrypt => (pos + k) % 26,
                Mode::Decrypt => (pos + 26 - k) % 26,
            };

            char::from(base + shifted)
        })
        .collect();

    Ok(result)
}
