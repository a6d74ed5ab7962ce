//! toyctl (toy) - command-line ULID/UUID converter
//!
//! Generates ULIDs, converts between ULID and UUID forms, and decodes
//! timestamps from pasted identifiers.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
