//! Output formatting shared by every subcommand.
//!
//! Each command renders a plain-text view for terminals and serializes the
//! same data as pretty JSON under `--json` (or `output.format: json`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use carrymap_core::StateCode;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as JSON, or the text produced by `text`.
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(value).context("failed to serialize output")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}

/// Comma-separated codes, or `-` for an empty list.
pub fn join_codes(codes: &[StateCode]) -> String {
    if codes.is_empty() {
        return "-".to_string();
    }
    codes
        .iter()
        .map(StateCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
