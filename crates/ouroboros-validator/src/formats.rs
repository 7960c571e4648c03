//! Date/time string parsing
//!
//! Pre-compiled regexes classify the accepted string shapes, then chrono
//! parses the matched shape. Offset-less forms are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Pre-compiled Regex Patterns
// ============================================================================

/// ISO 8601 / RFC 3339 datetime with offset
static RFC3339_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[Tt]\d{2}:\d{2}:\d{2}(\.\d{1,9})?([Zz]|[+-]\d{2}:\d{2})$")
        .expect("static RFC 3339 pattern")
});

/// Datetime without offset (`T` or space separator, optional seconds)
static NAIVE_DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d{1,9})?)?$")
        .expect("static naive datetime pattern")
});

/// Date only (YYYY-MM-DD)
static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

// ============================================================================
// Parsers
// ============================================================================

/// Parse a date/time string into a UTC instant
///
/// Accepts RFC 3339 (`2024-01-19T12:00:00Z`, `2024-01-19T12:00:00.5+08:00`),
/// naive datetimes (`2024-01-19T12:00`, `2024-01-19 12:00:00.250`), plain
/// dates (`2024-01-19`, midnight UTC) and RFC 2822
/// (`Fri, 19 Jan 2024 12:00:00 +0000`).
///
/// # Example
/// ```
/// use ouroboros_validator::formats::parse_datetime;
///
/// assert!(parse_datetime("2024-01-19T12:00:00Z").is_some());
/// assert!(parse_datetime("2024-01-19").is_some());
/// assert!(parse_datetime("not a date").is_none());
/// ```
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if RFC3339_REGEX.is_match(value) {
        return DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }

    if NAIVE_DATETIME_REGEX.is_match(value) {
        return parse_naive_datetime(value).map(|naive| naive.and_utc());
    }

    if DATE_REGEX.is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
    }

    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Convert epoch milliseconds into a UTC instant
///
/// Fractional milliseconds are truncated. Non-finite or out-of-range
/// values yield `None`.
pub fn from_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms.trunc() as i64)
}
