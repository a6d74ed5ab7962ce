//! Derived views of a ULID for display.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::convert::{smells_like_ulid, smells_like_uuid, ulid_to_uuid, uuid_to_ulid};
use crate::error::CodecError;
use crate::text::{decode_time, generate, normalize};

/// Everything the converter shows for a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UlidInfo {
    /// Normalized, uppercase ULID.
    pub ulid: String,
    /// The same 128 bits as a lowercase hyphenated UUID.
    pub uuid: String,
    /// Timestamp as RFC 3339 in UTC with millisecond precision.
    pub iso8601: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
    /// Seconds since the Unix epoch, rounded half up.
    pub timestamp: i64,
}

impl UlidInfo {
    /// Builds the full view from a ULID string.
    pub fn from_ulid(ulid: &str) -> Result<Self, CodecError> {
        let ulid = normalize(ulid).to_ascii_uppercase();
        let uuid = ulid_to_uuid(&ulid)?;
        let timestamp_millis = decode_time(&ulid)?;
        let iso8601 = format_iso8601(timestamp_millis)?;

        Ok(Self {
            ulid,
            uuid,
            iso8601,
            timestamp_millis,
            timestamp: (timestamp_millis + 500) / 1000,
        })
    }
}

/// Formats epoch milliseconds as RFC 3339 in UTC with millisecond precision.
pub fn format_iso8601(millis: i64) -> Result<String, CodecError> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| CodecError::malformed(format!("timestamp out of range: {millis}")))
}

/// Routes arbitrary pasted text to the ULID or UUID decoder.
pub fn inspect(input: &str) -> Result<UlidInfo, CodecError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CodecError::malformed("empty input"));
    }

    if smells_like_ulid(input) {
        debug!(input, "decoding as ULID");
        return UlidInfo::from_ulid(input);
    }
    if smells_like_uuid(input) {
        debug!(input, "decoding as UUID");
        return UlidInfo::from_ulid(&uuid_to_ulid(input)?);
    }

    debug!(input, "input matches neither ULID nor UUID");
    Err(CodecError::InvalidFormat {
        expected: "ULID or UUID",
    })
}

/// Generates a ULID and returns its full view.
pub fn generate_info(seed: Option<i64>) -> Result<UlidInfo, CodecError> {
    UlidInfo::from_ulid(&generate(seed)?)
}
