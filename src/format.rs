//! Value formatting for display cells.
//!
//! Converts arbitrary JSON values into the strings that appear in table
//! cells and card rows:
//!
//! - Strings render as raw text (no JSON quoting); RFC3339 timestamps are
//!   reformatted according to the configured [`TimeFormat`]
//! - Nested objects and arrays render as compact single-line JSON so
//!   columns stay single-row even for structured sub-values
//! - Everything else uses its default display form

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde_json::Value;

/// How timestamp-shaped strings are displayed.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum TimeFormat {
    /// Pass the value through untouched.
    #[default]
    Raw,
    /// Normalized RFC3339 in UTC.
    Iso,
    /// Human-relative, e.g. "5 min ago".
    Relative,
}

/// Formats a single value for display in a cell.
///
/// A missing value (`Null`) renders as the empty string rather than the
/// literal `null`, so heterogeneous records degrade field-by-field instead
/// of littering the table.
pub fn display_value(value: &Value, time_format: TimeFormat) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => format_maybe_time(s, time_format),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Compact JSON keeps structured sub-values on one line
        Value::Object(_) | Value::Array(_) => {
            crate::output::json::to_json(value, false).unwrap_or_default()
        }
    }
}

/// Reformats `s` if it parses as an RFC3339 timestamp and the policy asks
/// for it; any other string passes through unchanged.
fn format_maybe_time(s: &str, time_format: TimeFormat) -> String {
    if time_format == TimeFormat::Raw {
        return s.to_string();
    }

    let parsed = match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return s.to_string(),
    };

    match time_format {
        TimeFormat::Raw => s.to_string(),
        TimeFormat::Iso => parsed.to_rfc3339(),
        TimeFormat::Relative => format_relative_time(parsed),
    }
}

/// Formats a timestamp relative to now ("just now", "5 min ago", ...).
fn format_relative_time(ts: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
