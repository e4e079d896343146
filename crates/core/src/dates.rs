//! Date parsing and whole-day arithmetic for backend date strings.
//!
//! The backend emits dates in several textual forms (plain dates, naive
//! date-times, RFC 3339). Naive values are interpreted as UTC. Anything that
//! does not parse is reported as `None`; callers decide what to degrade to.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::types::Timestamp;

/// Milliseconds in one calendar day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Naive date-time layouts accepted after RFC 3339 fails.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Plain date layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a backend date string.
///
/// Returns `None` for empty, whitespace-only or unrecognized input.
pub fn parse_date(raw: &str) -> Option<Timestamp> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

/// Parse an optional backend date string.
pub fn parse_optional(raw: Option<&str>) -> Option<Timestamp> {
    raw.and_then(parse_date)
}

/// Whole days from `from` to `now`, rounded toward negative infinity.
///
/// A `from` later than `now` yields a negative count.
pub fn whole_days_between(from: Timestamp, now: Timestamp) -> i64 {
    (now - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Whole days elapsed since `raw` was recorded, or 0 when the value is
/// absent, unparseable or in the future.
pub fn days_since(raw: Option<&str>, now: Timestamp) -> i64 {
    match parse_optional(raw) {
        Some(from) => whole_days_between(from, now).max(0),
        None => 0,
    }
}
