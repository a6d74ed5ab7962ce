//! Direct ULID <-> UUID conversion.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_value, render_uuid};

use super::CommandContext;

/// Convert a ULID to a UUID.
#[derive(Debug, Args)]
pub struct ToUuidCommand {
    /// ULID to convert.
    ulid: String,
}

/// Convert a UUID to a ULID.
#[derive(Debug, Args)]
pub struct ToUlidCommand {
    /// UUID in 8-4-4-4-12 form.
    uuid: String,
}

#[derive(Debug, Serialize)]
struct Conversion {
    ulid: String,
    uuid: String,
}

impl Conversion {
    /// Both forms, with the ULID normalized and uppercased.
    fn from_ulid(ulid: &str, uppercase_uuid: bool) -> Result<Self, CliError> {
        let uuid = toybox_ulid::ulid_to_uuid(ulid)?;
        Ok(Self {
            ulid: toybox_ulid::normalize(ulid).to_ascii_uppercase(),
            uuid: render_uuid(uuid, uppercase_uuid),
        })
    }

    fn from_uuid(uuid: &str, uppercase_uuid: bool) -> Result<Self, CliError> {
        let ulid = toybox_ulid::uuid_to_ulid(uuid)?;
        Ok(Self {
            ulid,
            uuid: render_uuid(uuid.to_ascii_lowercase(), uppercase_uuid),
        })
    }
}

impl ToUuidCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let conversion = Conversion::from_ulid(self.ulid.trim(), ctx.uppercase_uuid)?;
        print_value(&conversion, &conversion.uuid, ctx.format);
        Ok(())
    }
}

impl ToUlidCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let conversion = Conversion::from_uuid(self.uuid.trim(), ctx.uppercase_uuid)?;
        print_value(&conversion, &conversion.ulid, ctx.format);
        Ok(())
    }
}
