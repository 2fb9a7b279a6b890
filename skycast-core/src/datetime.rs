//! en-US formatting of the local timestamps returned by the forecast API.
//!
//! The API is queried with `timezone=auto`, so every timestamp is already
//! wall-clock time at the forecast location and is formatted as-is.

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let trimmed = timestamp.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn format_with(timestamp: &str, fmt: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format(fmt).to_string(),
        None => timestamp.to_string(),
    }
}

/// `Monday, Jan 15, 2024`, or `Jan 15, 2024` without the weekday.
pub fn format_date(timestamp: &str, include_weekday: bool) -> String {
    if include_weekday {
        format_with(timestamp, "%A, %b %-d, %Y")
    } else {
        format_with(timestamp, "%b %-d, %Y")
    }
}

/// Hour label on a 12-hour clock, e.g. `2 PM`.
pub fn format_time(timestamp: &str) -> String {
    format_with(timestamp, "%-I %p")
}

pub fn short_weekday(timestamp: &str) -> String {
    format_with(timestamp, "%a")
}

/// Round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
