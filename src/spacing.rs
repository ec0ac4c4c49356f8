//! Sentence-spacing channel: hides bits in the whitespace after periods.
//!
//! Each sentence boundary carries one bit - a single trailing space for
//! '0', a double space for '1'. The payload is framed with fixed sentinel
//! patterns so extraction needs no explicit length. Bandwidth is one bit
//! per sentence, which keeps the change invisible to a casual reader.

use thiserror::Error;

/// Sentinel marking the start of the framed payload.
pub const HEADER: &str = "1010101010";

/// Sentinel marking the end of the framed payload.
pub const FOOTER: &str = "0101010101";

/// Errors that can occur while embedding into a carrier.
#[derive(Error, Debug)]
pub enum SpacingError {
    #[error("carrier has {available} sentence segments but the framed payload needs {needed}")]
    InsufficientCapacity { needed: usize, available: usize },
}

/// Embeds a bitstream into carrier text via sentence spacing.
///
/// The carrier is split on the literal `". "`; each non-blank segment can
/// carry one bit of `HEADER ++ bits ++ FOOTER`. Segments left over once
/// the framed payload is exhausted are re-joined with plain single-space
/// separators. Fails without producing output when the carrier has fewer
/// segments than the framed payload has bits.
pub fn embed(carrier: &str, bits: &str) -> Result<String, SpacingError> {
    let framed = format!("{HEADER}{bits}{FOOTER}");

    let sentences: Vec<&str> = carrier
        .split(". ")
        .filter(|segment| !segment.trim().is_empty())
        .collect();

    if sentences.len() < framed.len() {
        return Err(SpacingError::InsufficientCapacity {
            needed: framed.len(),
            available: sentences.len(),
        });
    }

    let framed = framed.as_bytes();
    let mut result = String::with_capacity(carrier.len() + framed.len());

    for (i, sentence) in sentences.iter().enumerate() {
        result.push_str(sentence);
        match framed.get(i) {
            Some(b'1') => result.push_str(".  "),
            _ => result.push_str(". "),
        }
    }

    Ok(result.trim().to_string())
}

/// Extracts a framed bitstream from steganographic text.
///
/// Splits on `'.'` and reads one bit per boundary: '1' when the following
/// segment starts with two or more whitespace characters, '0' otherwise.
/// Returns the bits strictly between the header and footer sentinels, or
/// an empty string when no sentinel pair is present - absence of a payload
/// is not an error.
///
/// The footer is taken at its last occurrence after the header: every
/// sentence past the framed payload reads as '0', so no later match can
/// be spurious, while a first-match rule would mis-frame payloads whose
/// suffix overlaps the footer prefix.
pub fn extract(steg_text: &str) -> String {
    let parts: Vec<&str> = steg_text.split('.').collect();

    let mut bits = String::with_capacity(parts.len());
    for pair in parts.windows(2) {
        let leading = pair[1].chars().take_while(|c| c.is_whitespace()).count();
        bits.push(if leading >= 2 { '1' } else { '0' });
    }

    let payload_start = match bits.find(HEADER) {
        Some(pos) => pos + HEADER.len(),
        None => return String::new(),
    };

    match bits[payload_start..].rfind(FOOTER) {
        Some(pos) => bits[payload_start..payload_start + pos].to_string(),
        None => String::new(),
    }
}
