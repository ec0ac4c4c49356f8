//! Caesar cipher: fixed alphabetic shift.

use super::Mode;

/// Applies a Caesar shift to ASCII letters, preserving case.
///
/// Characters outside A-Z and a-z pass through unchanged. Decryption
/// reverses the shift, so `caesar(caesar(t, s, Encrypt), s, Decrypt)`
/// returns `t` for any shift.
pub fn caesar(text: &str, shift: u8, mode: Mode) -> String {
    let shift = match mode {
        Mode::Encrypt => shift % 26,
        Mode::Decrypt => (26 - shift % 26) % 26,
    };

    text.chars().map(|c| shift_letter(c, shift)).collect()
}

fn shift_letter(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    char::from(base + (c as u8 - base + shift) % 26)
}
