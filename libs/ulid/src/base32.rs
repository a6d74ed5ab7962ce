//! Crockford base32 encoding over arbitrary byte sequences.
//!
//! The input is treated as one big-endian unsigned integer and regrouped into
//! 5-bit chunks, most significant chunk first. Both directions walk the input
//! from the least significant end and reverse at the end, so inputs whose bit
//! length is not a multiple of 5 (or 8) still group correctly.

use crate::error::CodecError;

/// The Crockford base32 alphabet. Excludes `I`, `L`, `O`, and `U`.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Returns the 5-bit value of `c`, accepting either case.
pub(crate) fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let upper = c.to_ascii_uppercase() as u8;
    ALPHABET.iter().position(|&a| a == upper).map(|i| i as u8)
}

/// Encodes `bytes` as Crockford base32.
///
/// Produces exactly `ceil(8 * len / 5)` characters; a 16-byte input always
/// yields 26 characters.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut symbols = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for &byte in bytes.iter().rev() {
        buffer |= u32::from(byte) << bits;
        bits += 8;

        while bits >= 5 {
            symbols.push(ALPHABET[(buffer & 0x1f) as usize]);
            buffer >>= 5;
            bits -= 5;
        }
    }
    if bits > 0 {
        symbols.push(ALPHABET[(buffer & 0x1f) as usize]);
    }

    symbols.reverse();
    symbols.into_iter().map(char::from).collect()
}

/// Decodes a Crockford base32 string, case-insensitively.
///
/// Leftover bits at the most significant end are dropped when there are fewer
/// than 5 of them and they are all zero; otherwise they become one more byte.
pub fn decode(input: &str) -> Result<Vec<u8>, CodecError> {
    let mut output = Vec::with_capacity(input.len() * 5 / 8 + 1);
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for character in input.chars().rev() {
        let value = symbol_value(character).ok_or(CodecError::InvalidCharacter { character })?;
        buffer |= u32::from(value) << bits;
        bits += 5;

        while bits >= 8 {
            output.push((buffer & 0xff) as u8);
            buffer >>= 8;
            bits -= 8;
        }
    }
    if bits >= 5 || buffer > 0 {
        output.push((buffer & 0xff) as u8);
    }

    output.reverse();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0xff]), "7Z");
        assert_eq!(encode(&[0x00, 0x01]), "0001");
        assert_eq!(encode(b"hello"), "D1JPRV3F");
        assert_eq!(encode(&[0u8; 16]), "0".repeat(26));
    }

    #[test]
    fn test_encode_sixteen_bytes_is_26_chars() {
        assert_eq!(encode(&[0xff; 16]).len(), 26);
        assert_eq!(encode(&[0xff; 16]), format!("7{}", "Z".repeat(25)));
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("7Z").unwrap(), vec![0xff]);
        assert_eq!(decode("0001").unwrap(), vec![0x00, 0x01]);
        assert_eq!(decode("d1jprv3f").unwrap(), b"hello".to_vec());
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_keeps_nonzero_leftover() {
        // 26 symbols are 130 bits; a leading symbol above 7 spills into a 17th byte.
        let bytes = decode(&"Z".repeat(26)).unwrap();
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[0], 0x03);
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode("not-base32!").unwrap_err();
        assert!(err.is_invalid_character());

        // U is not part of the alphabet.
        assert_eq!(decode("0U").unwrap_err(), CodecError::InvalidCharacter { character: 'U' });
    }

    #[test]
    fn test_matches_ulid_crate_encoding() {
        let bytes = [
            0x01, 0x8d, 0x7f, 0xd4, 0x4a, 0x0f, 0x53, 0x1e, 0xa1, 0x9b, 0x0b, 0xeb, 0x62, 0xeb,
            0xd4, 0xce,
        ];
        let oracle = ulid::Ulid::from_bytes(bytes).to_string();
        assert_eq!(encode(&bytes), oracle);
        assert_eq!(decode(&oracle).unwrap(), bytes.to_vec());
    }
}
