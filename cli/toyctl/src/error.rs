//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;
use toybox_ulid::CodecError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown output format '{0}'. Expected 'table' or 'json'.")]
    UnknownFormat(String),

    #[error("Only one of --millis, --seconds, --at, or --now may be given")]
    ConflictingSeed,

    #[error("Timestamp out of range: {0} seconds")]
    SecondsOutOfRange(i64),

    #[error("Could not parse '{input}' as a date and time: {reason}")]
    InvalidDateTime { input: String, reason: String },

    #[error("Could not determine config directory")]
    ConfigDir,

    #[error("Failed to read config from {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config from {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl CliError {
    /// Returns true if this error came from loading the config file.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CliError::ConfigDir | CliError::ConfigRead { .. } | CliError::ConfigParse { .. }
        )
    }
}

/// Hint shown under a codec error, if any.
fn codec_hint(err: &CodecError) -> Option<&'static str> {
    match err {
        CodecError::InvalidCharacter { .. } => {
            Some("Hint: Crockford base32 has no I, L, O, or U. I and L read as 1, O reads as 0.")
        }
        CodecError::InvalidFormat { .. } => {
            Some("Hint: Expected a 26-character ULID starting with 0-7, or an 8-4-4-4-12 UUID.")
        }
        CodecError::MalformedInput { .. } => None,
    }
}

/// Hint shown under any error, if one applies.
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(codec_err) = err.downcast_ref::<CodecError>() {
        return codec_hint(codec_err);
    }

    match err.downcast_ref::<CliError>()? {
        CliError::Codec(codec_err) => codec_hint(codec_err),
        CliError::InvalidDateTime { .. } => {
            Some("Hint: Use RFC 3339, e.g. 2024-02-06T19:10:35.535Z.")
        }
        cli_err if cli_err.is_config_error() => {
            Some("Hint: Fix or remove the config file, or pass --format explicitly.")
        }
        _ => None,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}
