//! Timestamp extraction.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::print_value;

use super::CommandContext;

/// Show the timestamp embedded in a ULID.
#[derive(Debug, Args)]
pub struct TimeCommand {
    /// ULID to decode.
    ulid: String,
}

#[derive(Debug, Serialize)]
struct TimeView {
    timestamp_millis: i64,
    iso8601: String,
}

impl TimeView {
    fn new(timestamp_millis: i64) -> Result<Self, CliError> {
        let iso8601 = toybox_ulid::format_iso8601(timestamp_millis)?;
        Ok(Self {
            timestamp_millis,
            iso8601,
        })
    }
}

impl TimeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let millis = toybox_ulid::decode_time(self.ulid.trim()).map_err(CliError::from)?;
        let view = TimeView::new(millis)?;

        let text = format!("{} ({})", view.timestamp_millis, view.iso8601);
        print_value(&view, &text, ctx.format);
        Ok(())
    }
}
