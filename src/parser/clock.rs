//! Clock-time parsing anchored on a roster day
//!
//! Accepted shapes (case-insensitive, after dash and whitespace normalization):
//! `H[:MM] am|pm`, `H:MM`, bare `H`/`HH`, and `24`/`24:00` for end of day.
//! Anything else parses to `None` rather than guessing.

use super::markup::{collapse_whitespace, normalize_dashes};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static MERIDIEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?\s*(am|pm)$").expect("valid meridiem regex")
});

static CLOCK_24: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid 24-hour regex"));

static HOUR_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("valid hour regex"));

static LABEL_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("valid dash regex"));

/// Parse a single clock expression into an instant on `day`.
///
/// Out-of-range shapes such as `0 am`, `13 pm` or `25` are rejected rather
/// than carried into the next hour or day.
pub fn parse_clock(day: NaiveDate, text: &str) -> Option<NaiveDateTime> {
    let s = collapse_whitespace(&normalize_dashes(text).to_lowercase());
    if s.is_empty() {
        return None;
    }

    let (hours, minutes): (u32, u32) = if let Some(caps) = MERIDIEM.captures(&s) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = match (&caps[3], hour) {
            ("am", 12) => 0,
            ("pm", 12) => 12,
            ("pm", h) => h + 12,
            (_, h) => h,
        };
        (hour, minute)
    } else if let Some(caps) = CLOCK_24.captures(&s) {
        (caps[1].parse().ok()?, caps[2].parse().ok()?)
    } else if HOUR_ONLY.is_match(&s) {
        (s.parse().ok()?, 0)
    } else {
        return None;
    };

    if minutes > 59 || hours > 24 || (hours == 24 && minutes > 0) {
        return None;
    }

    let midnight = day.and_hms_opt(0, 0, 0)?;
    Some(midnight + Duration::hours(hours.into()) + Duration::minutes(minutes.into()))
}

/// Parse a `start - end` range, rolling the end over to the next day when
/// it is not after the start.
pub fn parse_time_range(
    day: NaiveDate,
    label: &str,
) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    let normalized = normalize_dashes(label);
    let mut parts = normalized.split('-');
    let start = parts.next().and_then(|s| parse_clock(day, s));
    let end = parts.next().and_then(|s| parse_clock(day, s));

    (start, roll_over(start, end))
}

/// Advance `end` by one day if it is at or before `start`
pub fn roll_over(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    match (start, end) {
        (Some(start), Some(end)) if end <= start => Some(end + Duration::days(1)),
        (_, end) => end,
    }
}

/// Normalize a human time range label: `10am–6pm` becomes `10am - 6pm`.
pub fn normalize_time_label(text: &str) -> String {
    let dashed = normalize_dashes(text);
    collapse_whitespace(&LABEL_DASH.replace_all(&dashed, " - "))
}

/// Build a label from separate start and finish cells
pub fn join_time_label(start: &str, finish: &str) -> String {
    normalize_time_label(&format!("{} - {}", start.trim(), finish.trim()))
}
