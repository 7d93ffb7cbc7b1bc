//! Best-effort timestamp handling
//!
//! Exported timestamps come in several shapes. Nothing here fails: a value
//! that cannot be parsed is shown as-is and sorts as the epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y, %I:%M:%S %p",
    "%B %d, %Y, %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y"];

/// Parse a timestamp, assuming UTC when the value carries no offset
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Milliseconds since the epoch, or 0 when absent or unparseable
pub fn sort_key(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Human-readable timestamp; `N/A` when absent, the raw text when unparseable
pub fn display_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "N/A".to_string(),
        Some(value) => match parse_timestamp(value) {
            Some(dt) => dt.format("%b %-d, %Y, %-I:%M:%S %p UTC").to_string(),
            None => value.to_string(),
        },
    }
}

/// Current time as an RFC 3339 string with millisecond precision
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rfc3339() {
        let dt = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(dt.timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_parses_offset_and_naive_forms() {
        let with_offset = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        let naive = parse_timestamp("2024-01-01 00:00:00").unwrap();
        assert_eq!(with_offset, naive);

        let date_only = parse_timestamp("2024-01-01").unwrap();
        assert_eq!(date_only, naive);
    }

    #[test]
    fn test_unparseable_degrades() {
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(sort_key(Some("not a date")), 0);
        assert_eq!(sort_key(None), 0);
        assert_eq!(display_timestamp(Some("not a date")), "not a date");
        assert_eq!(display_timestamp(None), "N/A");
    }

    #[test]
    fn test_display_formats_parsed_value() {
        assert_eq!(
            display_timestamp(Some("2024-03-05T14:07:09Z")),
            "Mar 5, 2024, 2:07:09 PM UTC"
        );
    }
}
