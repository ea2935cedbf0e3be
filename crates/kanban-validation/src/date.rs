//! Date and date-time format matching
//!
//! Formats are chrono `strftime` patterns such as `%Y-%m-%d` or
//! `%m/%d/%Y %H:%M`. A value matches when the whole string parses with the
//! pattern, either as a date-time or as a plain date.

use chrono::{NaiveDate, NaiveDateTime};

/// Check a value against a single format
pub fn matches_format(value: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveDate::parse_from_str(value, format).is_ok()
}

/// Check a value against a list of formats, any match is enough
pub fn matches_any<S: AsRef<str>>(value: &str, formats: &[S]) -> bool {
    formats
        .iter()
        .any(|format| matches_format(value, format.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_formats() {
        assert!(matches_format("2024-03-15", "%Y-%m-%d"));
        assert!(matches_format("03/15/2024", "%m/%d/%Y"));
        assert!(matches_format("2024_03_15", "%Y_%m_%d"));

        assert!(!matches_format("2024-02-30", "%Y-%m-%d"));
        assert!(!matches_format("15/03/2024", "%m/%d/%Y"));
        assert!(!matches_format("2024-03-15 trailing", "%Y-%m-%d"));
        assert!(!matches_format("tomorrow", "%Y-%m-%d"));
    }

    #[test]
    fn test_date_time_formats() {
        assert!(matches_format("2024-03-15 14:30", "%Y-%m-%d %H:%M"));
        assert!(matches_format("03/15/2024 02:30 PM", "%m/%d/%Y %I:%M %p"));

        assert!(!matches_format("2024-03-15 25:00", "%Y-%m-%d %H:%M"));
        assert!(!matches_format("2024-03-15", "%Y-%m-%d %H:%M"));
    }

    #[test]
    fn test_matches_any() {
        let formats = ["%m/%d/%Y", "%Y-%m-%d"];

        assert!(matches_any("2024-03-15", &formats[..]));
        assert!(matches_any("03/15/2024", &formats[..]));
        assert!(!matches_any("15.03.2024", &formats[..]));

        let none: [&str; 0] = [];
        assert!(!matches_any("2024-03-15", &none[..]));
    }
}
