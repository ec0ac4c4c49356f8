//! Atbash cipher: mirrors the alphabet (A↔Z, B↔Y, ...).

/// Applies the Atbash substitution to ASCII letters.
///
/// Atbash is an involution: applying it twice restores the input.
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => char::from(b'Z' - (c as u8 - b'A')),
            'a'..='z' => char::from(b'z' - (c as u8 - b'a')),
            _ => c,
        })
        .collect()
}
