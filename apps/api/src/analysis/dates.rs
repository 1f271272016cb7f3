//! Lenient resume-date parsing.
//!
//! Accepts the formats resumes actually carry: `MM/YYYY`, a month name (full
//! or abbreviated) followed by a year, and a bare year. Anything else is
//! `None` rather than an error, since callers treat an unparseable date as an
//! absent one.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{4})$").unwrap());
static MONTH_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-z]{3,})\.?\s+(\d{4})$").unwrap());
static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").unwrap());

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(c) = NUMERIC.captures(s) {
        let month: u32 = c[1].parse().ok()?;
        let year: i32 = c[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Some(c) = MONTH_NAME.captures(s) {
        let prefix = c[1].to_lowercase();
        let month = MONTHS.iter().position(|m| prefix.starts_with(m))? as u32 + 1;
        let year: i32 = c[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Some(c) = BARE_YEAR.captures(s) {
        let year: i32 = c[1].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_numeric_month_year() {
        assert_eq!(parse_date("03/2021"), Some(ymd(2021, 3, 1)));
        assert_eq!(parse_date("12/1999"), Some(ymd(1999, 12, 1)));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(parse_date("March 2021"), Some(ymd(2021, 3, 1)));
        assert_eq!(parse_date("mar 2021"), Some(ymd(2021, 3, 1)));
        assert_eq!(parse_date("Sept 2020"), Some(ymd(2020, 9, 1)));
    }

    #[test]
    fn test_bare_year_is_january() {
        assert_eq!(parse_date("2021"), Some(ymd(2021, 1, 1)));
    }

    #[test]
    fn test_garbage_and_empty() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("banana"), None);
        assert_eq!(parse_date("13/2021"), None);
        assert_eq!(parse_date("  "), None);
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_date(" 03/2021 "), Some(ymd(2021, 3, 1)));
    }
}
