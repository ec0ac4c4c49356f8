//! Message recovery pipeline.
//!
//! This module orchestrates the decode direction:
//! 1. Extract the raw payload through the chosen channel
//! 2. Optionally decrypt it with a passphrase
//! 3. Return the recovered message, or `None` when nothing was found
//!
//! "No hidden message" is a normal outcome, not an error: only a payload
//! that is present but fails authenticated decryption produces an `Err`.

use thiserror::Error;

use crate::bits::{self, BitsError};
use crate::crypto::{decrypt_text, EncryptionError};
use crate::encoder::Channel;
use crate::spacing;
use crate::zero_width;

/// Errors that can occur while recovering a message.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("decryption error: {0}")]
    Decryption(#[from] EncryptionError),

    #[error(transparent)]
    Bits(#[from] BitsError),
}

/// Configuration for the recovery pipeline.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Recovers a hidden message from steganographic text.
///
/// Returns `Ok(None)` when the text carries no payload on the chosen
/// channel. When a passphrase is supplied, the extracted payload is
/// decrypted; a wrong passphrase surfaces as [`DecoderError::Decryption`]
/// rather than silently yielding garbage.
pub fn reveal(
    text: &str,
    passphrase: Option<&str>,
    channel: Channel,
) -> Result<Option<String>, DecoderError> {
    reveal_with_config(text, passphrase, channel, &DecoderConfig::default())
}

/// Recovers a message with custom configuration.
pub fn reveal_with_config(
    text: &str,
    passphrase: Option<&str>,
    channel: Channel,
    config: &DecoderConfig,
) -> Result<Option<String>, DecoderError> {
    // Step 1: channel extraction
    let payload = match channel {
        Channel::Spacing => {
            let stream = spacing::extract(text);
            if config.verbose {
                eprintln!("Extracted {} framed bits", stream.len());
            }
            match bits::bits_to_text(&stream)? {
                message if message.is_empty() => None,
                message => Some(message),
            }
        }
        Channel::ZeroWidth => zero_width::extract(text),
    };

    let payload = match payload {
        Some(p) => p,
        None => return Ok(None),
    };

    // Step 2: optional decryption
    match passphrase {
        Some(key) => {
            let message = decrypt_text(&payload, key)?;
            if config.verbose {
                eprintln!("Decrypted {} characters", message.len());
            }
            Ok(Some(message))
        }
        None => Ok(Some(payload)),
    }
}
