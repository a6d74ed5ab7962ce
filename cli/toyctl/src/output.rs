//! Output formatting for CLI commands.

use std::str::FromStr;

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use toybox_ulid::UlidInfo;

use crate::error::CliError;

const CLI_SCHEMA_VERSION: &str = "toybox.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

/// One identifier as a table row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct InfoRow {
    #[tabled(rename = "ISO8601")]
    pub iso8601: String,

    #[tabled(rename = "Timestamp")]
    pub timestamp: i64,

    #[tabled(rename = "Timestamp (millis)")]
    pub timestamp_millis: i64,

    #[tabled(rename = "ULID")]
    pub ulid: String,

    #[tabled(rename = "UUID")]
    pub uuid: String,
}

impl InfoRow {
    pub fn new(info: UlidInfo, uppercase_uuid: bool) -> Self {
        Self {
            iso8601: info.iso8601,
            timestamp: info.timestamp,
            timestamp_millis: info.timestamp_millis,
            ulid: info.ulid,
            uuid: render_uuid(info.uuid, uppercase_uuid),
        }
    }
}

/// Apply the configured UUID case.
pub fn render_uuid(uuid: String, uppercase: bool) -> String {
    if uppercase {
        uuid.to_ascii_uppercase()
    } else {
        uuid
    }
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single value. Table format prints `text` verbatim.
pub fn print_value<T: Serialize>(data: &T, text: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", text),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let wrapped = wrap_with_schema(to_camel_case_keys(value));
    serde_json::to_string_pretty(&wrapped).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

fn to_camel_case_keys(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(to_camel_case_keys).collect())
        }
        serde_json::Value::Object(entries) => serde_json::Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (snake_to_lower_camel(&key), to_camel_case_keys(value)))
                .collect(),
        ),
        other => other,
    }
}

fn snake_to_lower_camel(input: &str) -> String {
    let mut parts = input.split('_');
    let Some(first) = parts.next() else {
        return String::new();
    };
    let mut out = String::from(first);
    for part in parts {
        let mut chars = part.chars();
        if let Some(first_char) = chars.next() {
            out.push(first_char.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> UlidInfo {
        toybox_ulid::inspect("01HNZX8JGFACFA36RBXDHEQN6E").unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!(matches!("yaml".parse::<OutputFormat>(), Err(CliError::UnknownFormat(_))));
    }

    #[test]
    fn test_snake_to_lower_camel() {
        assert_eq!(snake_to_lower_camel("timestamp_millis"), "timestampMillis");
        assert_eq!(snake_to_lower_camel("uuid"), "uuid");
        assert_eq!(snake_to_lower_camel("a__b"), "aB");
    }

    #[test]
    fn test_json_envelope() {
        let rows = vec![InfoRow::new(sample_info(), false)];
        let value: serde_json::Value =
            serde_json::from_str(&format_json(rows.as_slice(), "[]")).unwrap();

        assert_eq!(value["schemaVersion"], CLI_SCHEMA_VERSION);
        assert_eq!(value["data"][0]["timestampMillis"], 1_707_246_635_535_i64);
        assert_eq!(value["data"][0]["uuid"], "018d7fd4-4a0f-531e-a19b-0beb62ebd4ce");
    }

    #[test]
    fn test_info_row_uppercase_uuid() {
        let row = InfoRow::new(sample_info(), true);
        assert_eq!(row.uuid, "018D7FD4-4A0F-531E-A19B-0BEB62EBD4CE");
        assert_eq!(row.ulid, "01HNZX8JGFACFA36RBXDHEQN6E");
    }

    #[test]
    fn test_table_has_headers() {
        let rows = vec![InfoRow::new(sample_info(), false)];
        let table = Table::new(&rows).to_string();
        assert!(table.contains("Timestamp (millis)"));
        assert!(table.contains("01HNZX8JGFACFA36RBXDHEQN6E"));
    }
}
