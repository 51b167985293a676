//! Test fixtures shared by the roster parser test modules
//!
//! Provides sample rosters in both grammars, a fixed fallback day and a
//! record builder for grouping tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::ParseConfig;
use crate::models::Record;

// Test modules
mod free_line_tests;
mod grouping_tests;

/// Day used as the fallback in every fixture config
pub fn fallback_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Config with a fixed fallback day so tests never depend on the clock
pub fn test_config() -> ParseConfig {
    ParseConfig::for_day(fallback_day())
}

/// Instant on an arbitrary day
pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap()
}

/// Forum roster in the tabular grammar: a title table and a body table
pub fn sample_tabular_roster() -> &'static str {
    r#"[TABLE]
[TR]
[TD][B][SIZE=4]Saturday[/SIZE][/B][/TD]
[TD][SIZE=4][COLOR=#000000]6/9/2025[/COLOR][/SIZE][/TD]
[/TR]
[/TABLE]

[TABLE="width: 500"]
[TR]
[TD][SIZE=3]Nationality[/SIZE][/TD]
[TD][SIZE=3]Name[/SIZE][/TD]
[TD][SIZE=3]Time[/SIZE][/TD]
[TD][SIZE=3]Rate[/SIZE][/TD]
[/TR]
[TR]
[TD]Vietnamese[/TD]
[TD][URL="https://example.com/profile/ami/?utm_source=a99"]Ami[/URL][/TD]
[TD]10 am – 10 pm[/TD]
[TD]300/h[/TD]
[/TR]
[TR]
[TD]Japanese[/TD]
[TD][URL="https://example.com/profile/almond/?utm_source=a99"]Almond[/URL][/TD]
[TD]10 am – 10 pm[/TD]
[TD]310/h[/TD]
[/TR]
[TR]
[TD]Vietnamese[/TD]
[TD][URL="https://example.com/profile/saka/?utm_source=a99"]Saka[/URL][/TD]
[TD]10 am – 6 pm[/TD]
[TD]300/h[/TD]
[/TR]
[TR]
[TD]Japanese[/TD]
[TD][URL="https://example.com/profile/hinata-1/?utm_source=a99"]Hinata[/URL][/TD]
[TD]10 am – 10 pm[/TD]
[TD]300/h[/TD]
[/TR]
[TR]
[TD]Japanese[/TD]
[TD][URL="https://example.com/profile/rina-1/?utm_source=a99"]Rina[/URL][/TD]
[TD]10 am – 5 pm[/TD]
[TD]300/h[/TD]
[/TR]
[TR]
[TD]Korean[/TD]
[TD][URL="https://example.com/profile/emma-1/?utm_source=a99"]Emma[/URL][/TD]
[TD]10 am – 6 pm[/TD]
[TD]300/h[/TD]
[/TR]
[/TABLE]"#
}

/// Tabular roster with split start/finish columns, a service column and a
/// header hint
pub fn split_column_roster() -> &'static str {
    r#"[TABLE][TR][TD]Sunday[/TD][TD]7/9/2025[/TD][/TR][/TABLE]
[TABLE]
[TR]
[TD][SIZE=3]Nationality[/SIZE][/TD]
[TD][SIZE=3]Name (((NEW)))[/SIZE][/TD]
[TD][SIZE=3]Start[/SIZE][/TD]
[TD][SIZE=3]Finish[/SIZE][/TD]
[TD][SIZE=3]Service[/SIZE][/TD]
[/TR]
[TR]
[TD]Indonesian[/TD]
[TD][URL="https://example.com/profile/hazel"]Hazel new[/URL][/TD]
[TD]10 am[/TD]
[TD]10 pm[/TD]
[TD]$300[/TD]
[/TR]
[/TABLE]"#
}

/// Roster in the free-line grammar
pub fn sample_free_line_roster() -> &'static str {
    "Friday 5/9/2025\n\
     (Thai) Mint NEW 11 pm - 6 am $280\n\
     (Japanese) Yuki 10am - 6pm 300/h\n\
     (Thai) Ploy 9 pm \u{2013} 3 am\n\
     not a roster line\n"
}

/// Minimal record for grouping tests
pub fn record(name: &str, nationality_key: &str, start: Option<NaiveDateTime>) -> Record {
    Record {
        name: name.to_string(),
        nationality_key: nationality_key.to_string(),
        flag: String::new(),
        time_label: String::new(),
        start,
        end: None,
        rate: None,
        tags: Vec::new(),
        profile_url: None,
    }
}
