//! Message hiding pipeline.
//!
//! This module orchestrates the encode direction:
//! 1. Validate carrier and secret
//! 2. Optionally encrypt the secret with a passphrase
//! 3. Route through the chosen channel (sentence spacing or zero-width)
//! 4. Return the modified carrier text

use thiserror::Error;

use crate::bits;
use crate::crypto::{encrypt_text, EncryptionError};
use crate::spacing::{self, SpacingError};
use crate::zero_width;

/// Steganographic channel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// One bit per sentence, carried in the spacing after periods.
    Spacing,
    /// Invisible marker characters spliced into the carrier.
    ZeroWidth,
}

/// Errors that can occur while hiding a message.
#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("empty secret message")]
    EmptySecret,

    #[error("empty carrier text")]
    EmptyCarrier,

    #[error(transparent)]
    Capacity(#[from] SpacingError),

    #[error("encryption error: {0}")]
    Encryption(#[from] EncryptionError),
}

/// Configuration for the hiding pipeline.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
    /// Fixed insertion offset for the zero-width channel; random when
    /// unset. Ignored by the spacing channel.
    pub offset: Option<usize>,
}

/// Hides a secret message inside carrier text.
///
/// # Arguments
/// * `carrier` - innocuous text that will carry the payload
/// * `secret` - the message to hide
/// * `passphrase` - when given, the secret is encrypted before embedding
/// * `channel` - which steganographic channel to use
///
/// # Returns
/// The modified carrier text, visually equivalent to the input.
pub fn hide(
    carrier: &str,
    secret: &str,
    passphrase: Option<&str>,
    channel: Channel,
) -> Result<String, EncoderError> {
    hide_with_config(carrier, secret, passphrase, channel, &EncoderConfig::default())
}

/// Hides a message with custom configuration.
pub fn hide_with_config(
    carrier: &str,
    secret: &str,
    passphrase: Option<&str>,
    channel: Channel,
    config: &EncoderConfig,
) -> Result<String, EncoderError> {
    if secret.is_empty() {
        return Err(EncoderError::EmptySecret);
    }
    if carrier.is_empty() {
        return Err(EncoderError::EmptyCarrier);
    }

    // Step 1: encrypt when a passphrase is supplied
    let payload = match passphrase {
        Some(key) => encrypt_text(secret, key)?,
        None => secret.to_string(),
    };

    if config.verbose && passphrase.is_some() {
        eprintln!("Encrypted secret to {} armored characters", payload.len());
    }

    // Step 2: route through the channel
    let result = match channel {
        Channel::Spacing => {
            let stream = bits::text_to_bits(&payload);
            if config.verbose {
                eprintln!("Embedding {} bits across sentence boundaries", stream.len());
            }
            spacing::embed(carrier, &stream)?
        }
        Channel::ZeroWidth => match config.offset {
            Some(offset) => zero_width::embed_at(&payload, carrier, offset),
            None => zero_width::embed(&payload, carrier),
        },
    };

    Ok(result)
}
