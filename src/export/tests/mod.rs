//! Test fixtures for roster exporters

use crate::config::ParseConfig;
use crate::models::RosterDocument;
use crate::parser::parse_roster;
use chrono::NaiveDate;


pub fn test_config() -> ParseConfig {
    ParseConfig::for_day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

/// Tabular roster exercising links, tags, header hints and a missing rate
pub fn annotated_roster() -> &'static str {
    r#"[TABLE][TR][TD][B][SIZE=4]Saturday[/SIZE][/B][/TD][TD][SIZE=4]6/9/2025[/SIZE][/TD][/TR][/TABLE]
[TABLE="width: 500"]
[TR]
[TD][SIZE=3]Nationality[/SIZE][/TD]
[TD][SIZE=3]Name (((GFE)))[/SIZE][/TD]
[TD][SIZE=3]Start[/SIZE][/TD]
[TD][SIZE=3]Finish[/SIZE][/TD]
[TD][SIZE=3]Rate[/SIZE][/TD]
[/TR]
[TR]
[TD]Thai[/TD]
[TD][URL="https://example.com/profile/mint"]Mint NEW[/URL][/TD]
[TD]11 pm[/TD]
[TD]6 am[/TD]
[TD]$280[/TD]
[/TR]
[TR]
[TD]Japanese[/TD]
[TD]Yuki gfe VIP[/TD]
[TD]10 am[/TD]
[TD]6 pm[/TD]
[TD]300/hr[/TD]
[/TR]
[TR]
[TD][/TD]
[TD]Lily came back[/TD]
[TD]noon[/TD]
[TD]8 pm[/TD]
[TD][/TD]
[/TR]
[/TABLE]"#
}

pub fn annotated_document() -> RosterDocument {
    parse_roster(annotated_roster(), &test_config())
}
