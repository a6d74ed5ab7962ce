//! ULID generation.

use anyhow::Result;
use chrono::DateTime;
use clap::Args;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, InfoRow};

use super::CommandContext;

/// Generate ULIDs.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Timestamp in milliseconds since the Unix epoch.
    #[arg(long, allow_negative_numbers = true)]
    millis: Option<i64>,

    /// Timestamp in seconds since the Unix epoch.
    #[arg(long, allow_negative_numbers = true)]
    seconds: Option<i64>,

    /// Date and time in RFC 3339 form, e.g. 2024-02-06T19:10:35.535Z.
    #[arg(long)]
    at: Option<String>,

    /// Use the current time (the default when no time is given).
    #[arg(long)]
    now: bool,

    /// Number of ULIDs to generate (at least 1).
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let seed = self.resolve_seed()?;
        debug!(?seed, count = self.count, "generating ULIDs");

        let rows = (0..self.count)
            .map(|_| {
                toybox_ulid::generate_info(seed)
                    .map(|info| InfoRow::new(info, ctx.uppercase_uuid))
                    .map_err(CliError::from)
            })
            .collect::<Result<Vec<_>, _>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }

    /// Pick the millisecond seed from whichever time flag was given.
    fn resolve_seed(&self) -> Result<Option<i64>, CliError> {
        let given = [
            self.millis.is_some(),
            self.seconds.is_some(),
            self.at.is_some(),
            self.now,
        ];
        if given.iter().filter(|&&g| g).count() > 1 {
            return Err(CliError::ConflictingSeed);
        }

        if let Some(millis) = self.millis {
            return Ok(Some(millis));
        }
        if let Some(seconds) = self.seconds {
            return seconds
                .checked_mul(1000)
                .map(Some)
                .ok_or(CliError::SecondsOutOfRange(seconds));
        }
        if let Some(at) = &self.at {
            let parsed =
                DateTime::parse_from_rfc3339(at).map_err(|e| CliError::InvalidDateTime {
                    input: at.clone(),
                    reason: e.to_string(),
                })?;
            return Ok(Some(parsed.timestamp_millis()));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> GenerateCommand {
        GenerateCommand {
            millis: None,
            seconds: None,
            at: None,
            now: false,
            count: 1,
        }
    }

    #[test]
    fn test_no_seed_means_now() {
        assert_eq!(command().resolve_seed().unwrap(), None);
        let cmd = GenerateCommand {
            now: true,
            ..command()
        };
        assert_eq!(cmd.resolve_seed().unwrap(), None);
    }

    #[test]
    fn test_seconds_scale_to_millis() {
        let cmd = GenerateCommand {
            seconds: Some(1_707_246_635),
            ..command()
        };
        assert_eq!(cmd.resolve_seed().unwrap(), Some(1_707_246_635_000));
    }

    #[test]
    fn test_seconds_overflow() {
        let cmd = GenerateCommand {
            seconds: Some(i64::MAX),
            ..command()
        };
        assert!(matches!(cmd.resolve_seed(), Err(CliError::SecondsOutOfRange(_))));
    }

    #[test]
    fn test_rfc3339_seed() {
        let cmd = GenerateCommand {
            at: Some("2024-02-06T19:10:35.535Z".to_string()),
            ..command()
        };
        assert_eq!(cmd.resolve_seed().unwrap(), Some(1_707_246_635_535));

        let cmd = GenerateCommand {
            at: Some("2024-02-06T21:10:35.535+02:00".to_string()),
            ..command()
        };
        assert_eq!(cmd.resolve_seed().unwrap(), Some(1_707_246_635_535));
    }

    #[test]
    fn test_unparseable_date() {
        let cmd = GenerateCommand {
            at: Some("yesterday".to_string()),
            ..command()
        };
        assert!(matches!(cmd.resolve_seed(), Err(CliError::InvalidDateTime { .. })));
    }

    #[test]
    fn test_conflicting_seeds() {
        let cmd = GenerateCommand {
            millis: Some(0),
            seconds: Some(0),
            ..command()
        };
        assert!(matches!(cmd.resolve_seed(), Err(CliError::ConflictingSeed)));
    }

    #[test]
    fn test_negative_millis_reach_codec() {
        let cmd = GenerateCommand {
            millis: Some(-1),
            ..command()
        };
        let seed = cmd.resolve_seed().unwrap();
        assert!(toybox_ulid::generate_info(seed).unwrap_err().is_malformed());
    }
}
