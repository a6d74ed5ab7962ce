//! Paste-anything decoding.

use anyhow::{Context, Result};
use clap::Args;

use crate::output::{print_output, InfoRow};

use super::CommandContext;

/// Decode a ULID or UUID.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// A ULID (any case, hyphens ignored) or a hyphenated UUID.
    input: String,
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let info = toybox_ulid::inspect(&self.input)
            .with_context(|| format!("Could not decode '{}'", self.input.trim()))?;

        print_output(&[InfoRow::new(info, ctx.uppercase_uuid)], ctx.format);
        Ok(())
    }
}
