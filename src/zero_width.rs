//! Zero-width channel: hides text behind invisible Unicode characters.
//!
//! The secret is encoded as a run of zero-width markers - U+200B for '0',
//! U+200C for '1' - bracketed by a pair of U+200D boundary markers and
//! spliced into the carrier at a single random position. The carrier
//! renders unchanged; extraction scans for the marker alphabet and reads
//! everything between the boundaries.
//!
//! One payload per carrier: a second boundary pair would toggle recording
//! off and back on mid-stream and corrupt extraction.

use rand::Rng;

use crate::bits;

/// Marker for bit '0' (zero-width space).
pub const ZERO: char = '\u{200B}';

/// Marker for bit '1' (zero-width non-joiner).
pub const ONE: char = '\u{200C}';

/// Payload boundary marker (zero-width joiner).
pub const BOUNDARY: char = '\u{200D}';

/// Hides `secret` inside `carrier` at a random position.
///
/// The insertion offset is drawn uniformly from `[0, char_count]`
/// inclusive, so each call produces a different splice point. Always
/// succeeds, even with an empty carrier.
pub fn embed(secret: &str, carrier: &str) -> String {
    let offset = rand::thread_rng().gen_range(0..=carrier.chars().count());
    embed_at(secret, carrier, offset)
}

/// Hides `secret` inside `carrier` at an explicit character offset.
///
/// Offsets past the end of the carrier are clamped to the end. This is
/// the deterministic entry point; `embed` layers the random draw on top.
pub fn embed_at(secret: &str, carrier: &str, offset: usize) -> String {
    let payload = bits::text_to_bits(secret);

    let mut markers = String::with_capacity((payload.len() + 2) * BOUNDARY.len_utf8());
    markers.push(BOUNDARY);
    for bit in payload.chars() {
        markers.push(if bit == '1' { ONE } else { ZERO });
    }
    markers.push(BOUNDARY);

    let byte_pos = carrier
        .char_indices()
        .nth(offset)
        .map(|(pos, _)| pos)
        .unwrap_or(carrier.len());

    let mut result = String::with_capacity(carrier.len() + markers.len());
    result.push_str(&carrier[..byte_pos]);
    result.push_str(&markers);
    result.push_str(&carrier[byte_pos..]);
    result
}

/// Recovers a message hidden with [`embed`].
///
/// Returns `None` when the text holds no boundary-bracketed payload that
/// decodes to a non-empty message - that is the "no hidden message"
/// sentinel, not an error.
pub fn extract(text: &str) -> Option<String> {
    let mut payload = String::new();
    let mut recording = false;

    for ch in text.chars() {
        match ch {
            BOUNDARY => recording = !recording,
            ZERO if recording => payload.push('0'),
            ONE if recording => payload.push('1'),
            _ => {}
        }
    }

    match bits::bits_to_text(&payload) {
        Ok(message) if !message.is_empty() => Some(message),
        _ => None,
    }
}
