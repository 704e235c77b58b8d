//! Display formatting for history timestamps.
//!
//! The history endpoint has returned ISO-8601, RFC-2822 (`Wed, 01 May 2024
//! 10:00:00 GMT`), naive ISO without offset, and epoch numbers. All are shown
//! in UTC; anything unparseable is shown verbatim.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDateTime, Utc};

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %H:%M UTC";

/// Epoch values below this are seconds, above are milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Parse any of the accepted timestamp shapes.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    let epoch = raw.parse::<i64>().ok()?;
    if epoch.abs() < EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp(epoch, 0)
    } else {
        DateTime::from_timestamp_millis(epoch)
    }
}

/// Human-readable creation date for a history row.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.trim().to_owned(), |dt| dt.format(DISPLAY_FORMAT).to_string())
}
