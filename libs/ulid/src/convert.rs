//! Conversion between ULID and UUID text forms.
//!
//! Both forms carry the same 16 bytes. The conversion is a plain byte-for-byte
//! reinterpretation: UUID version and variant bits are neither set nor checked.

use uuid::Uuid;

use crate::base32;
use crate::error::CodecError;
use crate::text::{looks_like_ulid, normalize};

/// Hyphen positions in the canonical `8-4-4-4-12` layout.
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Length of a canonical hyphenated UUID.
const UUID_LEN: usize = 36;

/// Converts a ULID to a lowercase hyphenated UUID.
pub fn ulid_to_uuid(ulid: &str) -> Result<String, CodecError> {
    let normalized = normalize(ulid);
    if !looks_like_ulid(&normalized) {
        return Err(CodecError::InvalidFormat { expected: "ULID" });
    }

    let decoded = base32::decode(&normalized)?;
    let bytes: [u8; 16] = decoded.try_into().map_err(|bytes: Vec<u8>| {
        CodecError::malformed(format!("ULID decoded to {} bytes", bytes.len()))
    })?;

    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}

/// Converts a canonical hyphenated UUID to an uppercase ULID.
pub fn uuid_to_ulid(uuid: &str) -> Result<String, CodecError> {
    if !smells_like_uuid(uuid) {
        return Err(CodecError::InvalidFormat { expected: "UUID" });
    }

    let parsed =
        Uuid::try_parse(uuid).map_err(|_| CodecError::InvalidFormat { expected: "UUID" })?;
    Ok(base32::encode(parsed.as_bytes()))
}

/// Cheap classifier: does the input look like a ULID once normalized?
#[must_use]
pub fn smells_like_ulid(input: &str) -> bool {
    looks_like_ulid(input)
}

/// Cheap classifier: is the input a hyphenated `8-4-4-4-12` hex UUID?
///
/// Braced, URN, and unhyphenated forms are rejected.
#[must_use]
pub fn smells_like_uuid(input: &str) -> bool {
    input.len() == UUID_LEN
        && input.bytes().enumerate().all(|(i, b)| {
            if UUID_HYPHENS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}
