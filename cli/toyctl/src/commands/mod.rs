//! CLI commands.

mod convert;
mod generate;
mod inspect;
mod time;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// toybox ULID/UUID converter.
#[derive(Debug, Parser)]
#[command(name = "toy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Falls back to the config file, then table.
    #[arg(long, global = true, env = "TOY_FORMAT")]
    format: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate ULIDs, optionally for a fixed time.
    Generate(generate::GenerateCommand),

    /// Decode a pasted ULID or UUID.
    Inspect(inspect::InspectCommand),

    /// Convert a ULID to a UUID.
    ToUuid(convert::ToUuidCommand),

    /// Convert a UUID to a ULID.
    ToUlid(convert::ToUlidCommand),

    /// Show the timestamp embedded in a ULID.
    Time(time::TimeCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let ctx = CommandContext::new(config, self.format.as_deref())?;

        match self.command {
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Inspect(cmd) => cmd.run(ctx),
            Commands::ToUuid(cmd) => cmd.run(ctx),
            Commands::ToUlid(cmd) => cmd.run(ctx),
            Commands::Time(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("toy {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub uppercase_uuid: bool,
}

impl CommandContext {
    /// Resolve settings, preferring the flag (or `TOY_FORMAT`) over the config file.
    pub fn new(config: Config, format_flag: Option<&str>) -> Result<Self> {
        let format = match format_flag.or(config.format.as_deref()) {
            Some(name) => name.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            format,
            uppercase_uuid: config.uppercase_uuid,
        })
    }
}
