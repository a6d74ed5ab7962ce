//! ULID text: normalization, validation, timestamp extraction, and generation.

use rand::RngCore;

use crate::base32::{symbol_value, ALPHABET};
use crate::error::CodecError;

/// Largest timestamp a ULID can carry: 2^48 - 1 milliseconds.
pub const TIME_MAX: i64 = 281_474_976_710_655;

/// Number of characters encoding the timestamp.
pub const TIME_LEN: usize = 10;

/// Number of characters encoding the random part.
pub const RANDOM_LEN: usize = 16;

/// Total length of a ULID string.
pub const ULID_LEN: usize = TIME_LEN + RANDOM_LEN;

/// Folds ambiguous characters and strips hyphens.
///
/// `I`, `i`, `L`, and `l` become `1`; `O` and `o` become `0`. Case is otherwise
/// left alone.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c != '-')
        .map(|c| match c {
            'I' | 'i' | 'L' | 'l' => '1',
            'O' | 'o' => '0',
            other => other,
        })
        .collect()
}

/// Strict structural check applied before conversion.
///
/// After normalization the input must be 26 alphabet characters with a
/// leading character in `0..=7`, which keeps the timestamp within 48 bits.
#[must_use]
pub fn looks_like_ulid(input: &str) -> bool {
    let normalized = normalize(input);
    let mut chars = normalized.chars();
    let leading_ok = matches!(chars.next(), Some('0'..='7'));
    leading_ok
        && normalized.chars().count() == ULID_LEN
        && chars.all(|c| symbol_value(c).is_some())
}

/// Loose check: 26 characters, all in the alphabet, case-insensitive.
///
/// Unlike [`looks_like_ulid`] this neither normalizes nor restricts the
/// leading character, so `"8ZZZZZZZZZZZZZZZZZZZZZZZZZ"` passes here but
/// fails there. The two predicates are kept separate on purpose.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    input.chars().count() == ULID_LEN && input.chars().all(|c| symbol_value(c).is_some())
}

/// Extracts the millisecond timestamp from a ULID.
///
/// Only the first 10 characters are decoded; the random part is length-checked
/// but not inspected.
pub fn decode_time(ulid: &str) -> Result<i64, CodecError> {
    let normalized = normalize(ulid);
    let length = normalized.chars().count();
    if length != ULID_LEN {
        return Err(CodecError::malformed(format!(
            "ULID must be {ULID_LEN} characters, got {length}"
        )));
    }

    let mut time: u64 = 0;
    for character in normalized.chars().take(TIME_LEN) {
        let value = symbol_value(character).ok_or(CodecError::InvalidCharacter { character })?;
        time = time * 32 + u64::from(value);
    }

    if time > TIME_MAX as u64 {
        return Err(CodecError::malformed(format!("timestamp too large: {time}")));
    }
    Ok(time as i64)
}

/// Encodes a millisecond timestamp as the 10-character time prefix.
pub fn encode_time(millis: i64) -> Result<String, CodecError> {
    if millis < 0 {
        return Err(CodecError::malformed(format!("time must not be negative: {millis}")));
    }
    if millis > TIME_MAX {
        return Err(CodecError::malformed(format!(
            "cannot encode a time larger than {TIME_MAX}: {millis}"
        )));
    }

    let mut remaining = millis as u64;
    let mut symbols = [b'0'; TIME_LEN];
    for slot in symbols.iter_mut().rev() {
        *slot = ALPHABET[(remaining % 32) as usize];
        remaining /= 32;
    }
    Ok(symbols.iter().copied().map(char::from).collect())
}

/// Produces the 16-character random part.
///
/// Each random byte is reduced modulo 32, keeping its low 5 bits. 256 is a
/// multiple of 32 so every symbol is equally likely.
fn encode_random<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; RANDOM_LEN];
    rng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|b| char::from(ALPHABET[(*b % 32) as usize]))
        .collect()
}

/// Generates a ULID from `seed` (or the current time) and the thread-local CSPRNG.
pub fn generate(seed: Option<i64>) -> Result<String, CodecError> {
    generate_with(seed, &mut rand::rng())
}

/// Generates a ULID drawing randomness from `rng`.
pub fn generate_with<R: RngCore + ?Sized>(
    seed: Option<i64>,
    rng: &mut R,
) -> Result<String, CodecError> {
    let millis = seed.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let mut ulid = encode_time(millis)?;
    ulid.push_str(&encode_random(rng));
    Ok(ulid)
}
