//! Date formatting for show start times.

use chrono::{DateTime, NaiveDateTime, Utc};

/// How much detail a formatted date carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    Medium,
}

impl DateStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Formats `value` for display.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>, style: DateStyle) -> String {
    value.format(style.pattern()).to_string()
}

/// Accepted layouts for a submitted start time, tried in order.
const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses a submitted start time.
///
/// Accepts RFC 3339 or one of [`START_TIME_FORMATS`]; values without an offset are UTC.
#[must_use]
pub fn parse_start_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
}
