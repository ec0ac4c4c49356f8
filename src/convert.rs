//! Radix conversions between text, binary, hexadecimal, and decimal.
//!
//! Binary output uses space-separated groups: 8 bits per character for
//! text, 4 bits per digit for hex. Like the bitstream codec, text
//! conversion works on UTF-16 code units truncated to their low byte, so
//! it is exact for Latin-1 and lossy beyond it.

use thiserror::Error;

/// Errors that can occur during radix conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid binary digit: use only '0' and '1'")]
    InvalidBinary,

    #[error("invalid hexadecimal digit: use 0-9 and A-F")]
    InvalidHex,

    #[error("binary group does not map to a valid character")]
    InvalidCharacter,

    #[error("binary value does not fit in 64 bits")]
    Overflow,
}

/// Converts text to space-separated 8-bit binary groups.
pub fn text_to_binary(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| format!("{:08b}", unit as u8))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts space-separated binary groups back to text.
///
/// Groups may be any length; each parses as one code point.
pub fn binary_to_text(binary: &str) -> Result<String, ConvertError> {
    let mut text = String::new();
    for group in binary.split_whitespace() {
        if group.chars().any(|c| c != '0' && c != '1') {
            return Err(ConvertError::InvalidBinary);
        }
        let value = u32::from_str_radix(group, 2).map_err(|_| ConvertError::InvalidCharacter)?;
        text.push(char::from_u32(value).ok_or(ConvertError::InvalidCharacter)?);
    }
    Ok(text)
}

/// Converts hexadecimal digits to space-separated 4-bit binary groups.
pub fn hex_to_binary(hex: &str) -> Result<String, ConvertError> {
    let groups: Result<Vec<String>, ConvertError> = hex
        .chars()
        .map(|digit| {
            digit
                .to_digit(16)
                .map(|value| format!("{value:04b}"))
                .ok_or(ConvertError::InvalidHex)
        })
        .collect();
    Ok(groups?.join(" "))
}

/// Converts binary (spaces optional) to uppercase hexadecimal.
///
/// The bit string is left-padded with zeros to a nibble boundary.
pub fn binary_to_hex(binary: &str) -> Result<String, ConvertError> {
    let clean: String = binary.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.chars().any(|c| c != '0' && c != '1') {
        return Err(ConvertError::InvalidBinary);
    }

    let padded = format!("{:0>width$}", clean, width = clean.len().div_ceil(4) * 4);

    let mut hex = String::with_capacity(padded.len() / 4);
    for chunk in padded.as_bytes().chunks(4) {
        let value = chunk.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b - b'0'));
        // value < 16, always a valid hex digit
        hex.extend(char::from_digit(value, 16).map(|c| c.to_ascii_uppercase()));
    }
    Ok(hex)
}

/// Formats a decimal value as binary.
pub fn decimal_to_binary(value: u64) -> String {
    format!("{value:b}")
}

/// Parses a binary string as a decimal value.
pub fn binary_to_decimal(binary: &str) -> Result<u64, ConvertError> {
    if binary.is_empty() || binary.chars().any(|c| c != '0' && c != '1') {
        return Err(ConvertError::InvalidBinary);
    }
    u64::from_str_radix(binary, 2).map_err(|_| ConvertError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_binary_roundtrip() {
        let binary = text_to_binary("Hi!");
        assert_eq!(binary, "01001000 01101001 00100001");
        assert_eq!(binary_to_text(&binary).unwrap(), "Hi!");
    }

    #[test]
    fn test_binary_to_text_rejects_bad_digits() {
        assert!(matches!(
            binary_to_text("01001000 0110100x"),
            Err(ConvertError::InvalidBinary)
        ));
    }

    #[test]
    fn test_binary_to_text_variable_group_length() {
        // "1000001" is 65 = 'A' without the leading zero.
        assert_eq!(binary_to_text("1000001").unwrap(), "A");
    }

    #[test]
    fn test_hex_binary_roundtrip() {
        assert_eq!(hex_to_binary("2A").unwrap(), "0010 1010");
        assert_eq!(binary_to_hex("0010 1010").unwrap(), "2A");
    }

    #[test]
    fn test_hex_lowercase_accepted() {
        assert_eq!(hex_to_binary("ff").unwrap(), "1111 1111");
    }

    #[test]
    fn test_hex_rejects_bad_digits() {
        assert!(matches!(hex_to_binary("12G4"), Err(ConvertError::InvalidHex)));
    }

    #[test]
    fn test_binary_to_hex_pads_to_nibble() {
        assert_eq!(binary_to_hex("101").unwrap(), "5");
        assert_eq!(binary_to_hex("11010").unwrap(), "1A");
    }

    #[test]
    fn test_decimal_binary_roundtrip() {
        assert_eq!(decimal_to_binary(42), "101010");
        assert_eq!(binary_to_decimal("101010").unwrap(), 42);
        assert_eq!(binary_to_decimal(&decimal_to_binary(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn test_binary_to_decimal_overflow() {
        let too_wide = "1".repeat(65);
        assert!(matches!(binary_to_decimal(&too_wide), Err(ConvertError::Overflow)));
    }

    #[test]
    fn test_binary_to_decimal_rejects_bad_digits() {
        assert!(matches!(binary_to_decimal("10201"), Err(ConvertError::InvalidBinary)));
        assert!(matches!(binary_to_decimal(""), Err(ConvertError::InvalidBinary)));
    }
}
