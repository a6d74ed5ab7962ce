//! Error types for codec operations.

use thiserror::Error;

/// Errors that can occur when decoding, converting, or generating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the expected alphabet was encountered while decoding.
    #[error("invalid character: '{character}'")]
    InvalidCharacter { character: char },

    /// The alphabet was right but the length or decoded value was not.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The input failed the structural pattern before any decoding was attempted.
    #[error("invalid {expected}")]
    InvalidFormat { expected: &'static str },
}

impl CodecError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Returns true if this error was caused by a character outside the alphabet.
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, CodecError::InvalidCharacter { .. })
    }

    /// Returns true if this error indicates a wrong length or out-of-range value.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::MalformedInput { .. })
    }

    /// Returns true if this error indicates the input did not match the expected pattern.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, CodecError::InvalidFormat { .. })
    }
}
