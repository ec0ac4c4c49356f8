//! # Shadowink - hide messages in plain sight
//!
//! Shadowink is a text steganography toolkit. It embeds secret messages
//! inside innocuous carrier text over two independent channels, with
//! optional passphrase encryption layered underneath, plus a set of
//! classic-cipher and conversion utilities around the core.
//!
//! ## Channels
//!
//! - **Sentence spacing**: one bit per sentence, carried in the number of
//!   spaces after each period (one space = 0, two spaces = 1). The payload
//!   is framed by fixed sentinel bit patterns, so extraction is
//!   self-delimiting. Near-invisible to a reader, but low bandwidth - the
//!   carrier needs one sentence per framed bit.
//! - **Zero-width**: the payload is mapped to invisible Unicode characters
//!   and spliced into the carrier at a random position. Zero visual
//!   impact at any bandwidth, but fragile against whitespace-stripping
//!   intermediaries.
//!
//! Both channels move bits produced by the [`bits`] codec: one 8-bit
//! group per UTF-16 code unit, which is exact for Latin-1 text and lossy
//! beyond it.
//!
//! ## Example
//!
//! ```rust
//! use shadowink::{hide, reveal, Channel};
//!
//! let steg = hide("just an ordinary note", "meet at dawn", None, Channel::ZeroWidth).unwrap();
//! assert_eq!(steg.chars().filter(|c| c.is_alphabetic()).count(),
//!            "just an ordinary note".chars().filter(|c| c.is_alphabetic()).count());
//!
//! let recovered = reveal(&steg, None, Channel::ZeroWidth).unwrap();
//! assert_eq!(recovered.as_deref(), Some("meet at dawn"));
//! ```
//!
//! ## Modules
//!
//! - [`bits`]: bitstream codec (text to '0'/'1' strings and back)
//! - [`spacing`]: sentence-spacing channel
//! - [`zero_width`]: zero-width character channel
//! - [`encoder`] / [`decoder`]: hide/reveal pipelines with optional encryption
//! - [`crypto`]: passphrase-based authenticated encryption
//! - [`cipher`]: classic substitution ciphers (Caesar, Vigenère, XOR, Atbash)
//! - [`convert`]: text/binary/hex/decimal conversions
//! - [`hash`]: digest generation
//! - [`strength`]: passphrase strength heuristics and key generation

pub mod bits;
pub mod cipher;
pub mod convert;
pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod hash;
pub mod spacing;
pub mod strength;
pub mod zero_width;

// Re-export commonly used types at the crate root
pub use bits::{bits_to_text, text_to_bits, BitsError};
pub use decoder::{reveal, reveal_with_config, DecoderConfig, DecoderError};
pub use encoder::{hide, hide_with_config, Channel, EncoderConfig, EncoderError};
pub use spacing::SpacingError;
