//! Module for lenient date parsing.
//!
//! Input tables carry dates as free-form strings. Parsing never fails the
//! row: an unrecognized value simply yields `None` and downstream derived
//! columns stay null.

use chrono::NaiveDate;

/// Formats tried in order before falling back to detection.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d.%m.%Y", "%Y%m%d"];

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    // Fall back to pattern-based detection for anything the fixed list missed
    if let Some(detected) = detect_date_format(s) {
        if let Ok(date) = NaiveDate::parse_from_str(s, detected) {
            return Some(date);
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 4 {
                // Day-first when the first component cannot be a month
                return Some("%d/%m/%Y");
            }
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y");
        }
    }

    // Compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2023-01-10"),
            NaiveDate::from_ymd_opt(2023, 1, 10)
        );
    }

    #[test]
    fn parses_slash_and_compact_formats() {
        assert_eq!(
            parse_date("15/03/2022"),
            NaiveDate::from_ymd_opt(2022, 3, 15)
        );
        assert_eq!(
            parse_date("2022/03/15"),
            NaiveDate::from_ymd_opt(2022, 3, 15)
        );
        assert_eq!(parse_date("20220315"), NaiveDate::from_ymd_opt(2022, 3, 15));
    }

    #[test]
    fn garbage_and_empty_yield_none() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("2023-13-45"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_date(" 2023-01-10 "),
            NaiveDate::from_ymd_opt(2023, 1, 10)
        );
    }
}
