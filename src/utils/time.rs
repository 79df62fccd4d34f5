//! Time utilities: reference-timezone clock, HH:MM:SS parsing, offsets.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveTime, Utc};

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts `HH:MM:SS` or `HH:MM`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a UTC offset written as `±HH:MM`, `±HHMM` or `Z`.
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let invalid = || AppError::Config(format!("invalid utc_offset '{}'", s));
    let s = s.trim();

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[0..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..4].parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Current instant in the reference timezone.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Stamp for an event: explicit time and date win only when both are given,
/// otherwise both are taken from `now`.
pub fn resolve_timestamp(
    time: Option<&str>,
    date: Option<&str>,
    now: &DateTime<FixedOffset>,
) -> (String, String) {
    fn given(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|s| !s.is_empty())
    }

    match (given(time), given(date)) {
        (Some(t), Some(d)) => (t.to_string(), d.to_string()),
        _ => (
            now.format(TIME_FORMAT).to_string(),
            now.format(DATE_FORMAT).to_string(),
        ),
    }
}
