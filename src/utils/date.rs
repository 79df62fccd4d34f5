use chrono::NaiveDate;

use super::time::DATE_FORMAT;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// True when `date` parses and lies in `[start, end]`.
pub fn date_in_bounds(date: &str, bounds: (NaiveDate, NaiveDate)) -> bool {
    parse_date(date)
        .map(|d| d >= bounds.0 && d <= bounds.1)
        .unwrap_or(false)
}
