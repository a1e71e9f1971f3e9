//! Parsing and formatting of local date-time values.
//!
//! Requests carry the same values a `datetime-local` form input produces:
//! `2022-08-31T01:00`, optionally with seconds.

use chrono::{NaiveDateTime, Timelike};

/// Minute-precision wire format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";
const TIMESTAMP_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors that can occur while parsing a timestamp.
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("Invalid timestamp '{0}', expected YYYY-MM-DDTHH:MM")]
    InvalidFormat(String),
}

/// Parses `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
///
/// # Errors
///
/// Returns [`TimestampError::InvalidFormat`] if neither format matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let value = value.trim();

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT))
        .map_err(|_| TimestampError::InvalidFormat(value.to_string()))
}

/// Formats a timestamp, dropping the seconds when they are zero.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    if value.second() == 0 {
        value.format(TIMESTAMP_FORMAT).to_string()
    } else {
        value.format(TIMESTAMP_FORMAT_SECONDS).to_string()
    }
}
