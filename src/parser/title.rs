//! Roster day and title resolution
//!
//! Pulling the calendar day out of free text is a heuristic, so it sits
//! behind the [`DayResolver`] trait and can be replaced without touching row
//! parsing.

use super::markup::strip_markup;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const WEEKDAYS: &str = "Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday";

static TAGGED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\]\s*(\d{1,2})/(\d{1,2})/(\d{4})\s*\[").expect("valid tagged date regex")
});

static TAGGED_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\]\s*({WEEKDAYS})\s*\[")).expect("valid tagged weekday regex")
});

static TITLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:({WEEKDAYS}),?\s+)?(\d{{1,2}})/(\d{{1,2}})/(\d{{4}})$"
    ))
    .expect("valid title line regex")
});

/// Calendar day and display title found in the raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    pub day: NaiveDate,
    pub title: String,
}

/// Strategy for finding the roster day in raw input
pub trait DayResolver: Send + Sync {
    /// Return the day and title, or `None` to use the caller's fallbacks
    fn resolve(&self, raw: &str) -> Option<ResolvedDay>;
}

/// Default resolver for forum posts.
///
/// Looks for a tag-delimited `d/m/yyyy` token (`]6/9/2025[`) and an optional
/// tag-delimited weekday (`]Saturday[`); failing that, a first line of the
/// form `Saturday 6/9/2025`. Dates are day-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketDateResolver;

impl DayResolver for BracketDateResolver {
    fn resolve(&self, raw: &str) -> Option<ResolvedDay> {
        if let Some(caps) = TAGGED_DATE.captures(raw) {
            let weekday = TAGGED_WEEKDAY.captures(raw).map(|w| w[1].to_string());
            return build_day(weekday.as_deref(), &caps[1], &caps[2], &caps[3]);
        }

        let first_line = raw.lines().map(strip_markup).find(|l| !l.is_empty())?;
        let caps = TITLE_LINE.captures(&first_line)?;
        build_day(caps.get(1).map(|m| m.as_str()), &caps[2], &caps[3], &caps[4])
    }
}

fn build_day(weekday: Option<&str>, d: &str, m: &str, y: &str) -> Option<ResolvedDay> {
    let day = NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)?;
    let date = format!("{d}/{m}/{y}");
    let title = match weekday {
        Some(weekday) => format!("{weekday} {date}"),
        None => date,
    };
    Some(ResolvedDay { day, title })
}
