//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current time as epoch milliseconds. Plot identifiers in the KYC wizard
/// are derived from this value.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Format an RFC3339 timestamp for display as "DD Mon YYYY"; fall back to
/// the raw string when it does not parse.
pub fn display_date(moment: &str) -> String {
    match parse_utc(moment) {
        Ok(dt) => dt.format("%d %b %Y").to_string(),
        Err(_) => moment.to_string(),
    }
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let now = now_utc();
        let parsed = parse_utc(&format_time(now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2026-01-05T09:30:00Z"), "05 Jan 2026");
        assert_eq!(display_date("garbage"), "garbage");
    }
}
