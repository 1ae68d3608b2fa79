//! Date parsing and ISO `YYYY-MM-DD` normalization.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;

/// Strict `M/D/Y` or `M-D-Y` with a 2- or 4-digit year.
static MDY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4}|\d{2})$").expect("Invalid M/D/Y regex")
});

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid ISO date regex"));

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a, %d %b %Y",
];

/// Years below this are rejected by the generic parser so that two-digit
/// years reach the `M/D/Y` fallback instead of landing in the first century.
const MIN_GENERIC_YEAR: i32 = 1000;

/// Returns true for values already shaped `YYYY-MM-DD`.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value.trim())
}

/// Generic date/time parsing. Offsets are converted to UTC.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .ok()
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    (parsed.year() >= MIN_GENERIC_YEAR).then_some(parsed)
}

/// Parse the strict `M/D/Y` fallback. A 2-digit year maps to `20YY`.
pub fn parse_month_day_year(value: &str) -> Option<NaiveDate> {
    let captures = MDY_REGEX.captures(value.trim())?;
    let month: u32 = captures[1].parse().ok()?;
    let day: u32 = captures[2].parse().ok()?;
    let year_text = &captures[3];
    let mut year: i32 = year_text.parse().ok()?;
    if year_text.len() == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Any date the engine understands: generic formats first, then `M/D/Y`.
pub fn parse_date_value(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value).or_else(|| {
        parse_month_day_year(value).map(|date| date.and_time(NaiveTime::MIN))
    })
}

/// Reformat a date as `YYYY-MM-DD`, or return the input unchanged.
pub fn normalize_date(value: &str) -> String {
    match parse_date_value(value) {
        Some(parsed) => parsed.date().format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_input_is_stable() {
        assert_eq!(normalize_date("2024-01-05"), "2024-01-05");
        assert!(is_iso_date("2024-01-05"));
        assert!(!is_iso_date("2024-1-5"));
    }

    #[test]
    fn generic_formats() {
        assert_eq!(normalize_date("2024/03/09"), "2024-03-09");
        assert_eq!(normalize_date("March 9, 2024"), "2024-03-09");
        assert_eq!(normalize_date("9 Mar 2024"), "2024-03-09");
        assert_eq!(normalize_date("2024-03-09T22:15:00"), "2024-03-09");
    }

    #[test]
    fn offsets_resolve_to_utc_calendar_day() {
        assert_eq!(normalize_date("2024-03-09T22:15:00-05:00"), "2024-03-10");
    }

    #[test]
    fn month_day_year_fallback() {
        assert_eq!(normalize_date("1/5/2024"), "2024-01-05");
        assert_eq!(normalize_date("12-31-99"), "2099-12-31");
        assert_eq!(normalize_date("01/05/24"), "2024-01-05");
    }

    #[test]
    fn unparseable_is_unchanged() {
        assert_eq!(normalize_date("next tuesday"), "next tuesday");
        assert_eq!(normalize_date("13/45/2024"), "13/45/2024");
        assert_eq!(normalize_date(""), "");
    }
}
