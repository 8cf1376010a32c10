//! Absolute and relative date rendering for listing timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// Offset-less timestamps are read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Parse an RFC 3339 timestamp, an offset-less date-time, or a bare `YYYY-MM-DD` date.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `"December 10, 2025"`, or `"Invalid Date"` when the timestamp does not parse.
pub fn format_absolute(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Whole days from `timestamp` to `now`, floored. Negative for future timestamps.
pub fn relative_days(timestamp: &str, now: DateTime<Utc>) -> Option<i64> {
    let then = parse_timestamp(timestamp)?;
    let diff_ms = (now - then).num_milliseconds();
    Some(diff_ms.div_euclid(MS_PER_DAY))
}

/// Coarse age of `timestamp` relative to `now`.
///
/// Future timestamps produce a negative day count and land in the days bucket,
/// e.g. `"-4 days ago"`. Unparseable timestamps yield `"Invalid Date"`.
pub fn format_relative(timestamp: &str, now: DateTime<Utc>) -> String {
    match relative_days(timestamp, now) {
        Some(days) => bucket_days(days),
        None => INVALID_DATE.to_string(),
    }
}

/// [`format_relative`] against the system clock.
pub fn format_relative_now(timestamp: &str) -> String {
    format_relative(timestamp, Utc::now())
}

fn bucket_days(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        parse_timestamp("2025-12-16T12:00:00Z").unwrap()
    }

    #[test]
    fn test_format_absolute() {
        assert_eq!(format_absolute("2025-12-10T00:00:00Z"), "December 10, 2025");
        assert_eq!(format_absolute("2025-01-15T00:00:00Z"), "January 15, 2025");
        assert_eq!(format_absolute("2025-06-20T00:00:00Z"), "June 20, 2025");
    }

    #[test]
    fn test_format_absolute_day_has_no_leading_zero() {
        assert_eq!(format_absolute("2025-03-01T00:00:00Z"), "March 1, 2025");
        assert_eq!(format_absolute("2025-03-31T00:00:00Z"), "March 31, 2025");
    }

    #[test]
    fn test_format_absolute_leap_day() {
        assert_eq!(format_absolute("2024-02-29T00:00:00Z"), "February 29, 2024");
    }

    #[test]
    fn test_format_absolute_ignores_time_of_day() {
        assert_eq!(format_absolute("2025-12-10T12:00:00Z"), "December 10, 2025");
        assert_eq!(format_absolute("2025-12-10T23:59:59.999Z"), "December 10, 2025");
    }

    #[test]
    fn test_format_absolute_accepts_bare_date_and_naive_datetime() {
        assert_eq!(format_absolute("2025-01-15"), "January 15, 2025");
        assert_eq!(format_absolute("2025-01-15T08:30:00"), "January 15, 2025");
    }

    #[test]
    fn test_format_absolute_invalid() {
        assert_eq!(format_absolute("invalid-date"), "Invalid Date");
        assert_eq!(format_absolute(""), "Invalid Date");
        assert_eq!(format_absolute("2025-02-30"), "Invalid Date");
    }

    #[test]
    fn test_format_relative_today_and_yesterday() {
        assert_eq!(format_relative("2025-12-16T10:00:00Z", now()), "Today");
        assert_eq!(format_relative("2025-12-15T12:00:00Z", now()), "Yesterday");
    }

    #[test]
    fn test_format_relative_days() {
        assert_eq!(format_relative("2025-12-13T12:00:00Z", now()), "3 days ago");
        assert_eq!(format_relative("2025-12-10T12:00:00Z", now()), "6 days ago");
    }

    #[test]
    fn test_format_relative_exactly_seven_days_is_weeks() {
        assert_eq!(format_relative("2025-12-09T12:00:00Z", now()), "1 weeks ago");
        assert_eq!(format_relative("2025-12-02T12:00:00Z", now()), "2 weeks ago");
    }

    #[test]
    fn test_format_relative_months_and_years() {
        assert_eq!(format_relative("2025-11-16T12:00:00Z", now()), "1 months ago");
        assert_eq!(format_relative("2025-10-16T12:00:00Z", now()), "2 months ago");
        assert_eq!(format_relative("2024-12-16T12:00:00Z", now()), "1 years ago");
        assert_eq!(format_relative("2023-12-16T12:00:00Z", now()), "2 years ago");
    }

    #[test]
    fn test_format_relative_partial_day_floors() {
        // 47 hours is still one whole day
        assert_eq!(format_relative("2025-12-14T13:00:00Z", now()), "Yesterday");
    }

    #[test]
    fn test_format_relative_future_falls_through_to_days() {
        let result = format_relative("2025-12-20T12:00:00Z", now());
        assert_eq!(result, "-4 days ago");
        assert!(result.contains("ago"));

        // An hour ahead floors to -1 rather than 0
        assert_eq!(format_relative("2025-12-16T13:00:00Z", now()), "-1 days ago");
    }

    #[test]
    fn test_format_relative_invalid() {
        assert_eq!(format_relative("invalid-date", now()), "Invalid Date");
        assert_eq!(relative_days("invalid-date", now()), None);
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(relative_days("2025-12-09T12:00:00Z", now()), Some(7));
        assert_eq!(relative_days("2025-12-16T12:00:00Z", now()), Some(0));
    }

    #[test]
    fn test_format_relative_now_uses_clock() {
        assert_eq!(format_relative_now(&Utc::now().to_rfc3339()), "Today");
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2025-12-10T01:00:00+02:00").unwrap();
        assert_eq!(dt, parse_timestamp("2025-12-09T23:00:00Z").unwrap());
    }
}
