//! Tests for rosters in the free-line grammar

use super::*;
use crate::models::RosterGrammar;
use crate::parser::parse_roster;

fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
}

#[test]
fn test_free_line_roster_document() {
    let doc = parse_roster(sample_free_line_roster(), &test_config());

    assert_eq!(doc.grammar, RosterGrammar::FreeLine);
    assert_eq!(doc.title, "Friday 5/9/2025");
    assert_eq!(doc.day, friday());

    assert_eq!(doc.stats.rows_seen, 5);
    assert_eq!(doc.stats.records_parsed, 3);
    assert_eq!(doc.stats.rows_skipped, 2);
}

#[test]
fn test_free_line_groups_sorted_by_start() {
    let doc = parse_roster(sample_free_line_roster(), &test_config());

    let keys: Vec<&str> = doc.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["thai", "japanese"]);

    let names: Vec<&str> = doc.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ploy", "Mint", "Yuki"]);
}

#[test]
fn test_free_line_record_fields() {
    let doc = parse_roster(sample_free_line_roster(), &test_config());
    let mint = doc.records.iter().find(|r| r.name == "Mint").unwrap();
    let saturday = friday().succ_opt().unwrap();

    assert_eq!(mint.time_label, "11 pm - 6 am");
    assert_eq!(mint.start, Some(at(friday(), 23, 0)));
    assert_eq!(mint.end, Some(at(saturday, 6, 0)));
    assert_eq!(mint.rate.as_deref(), Some("$280/H"));
    assert_eq!(mint.tags, vec!["NEW".to_string()]);

    let yuki = doc.records.iter().find(|r| r.name == "Yuki").unwrap();
    assert_eq!(yuki.time_label, "10am - 6pm");
    assert_eq!(yuki.rate.as_deref(), Some("300/H"));
    assert_eq!(yuki.flag, "🇯🇵");
}

#[test]
fn test_free_line_summary_crosses_midnight() {
    let doc = parse_roster(sample_free_line_roster(), &test_config());
    assert_eq!(doc.date_summary.as_deref(), Some("10:00 → next day 06:00"));
}

#[test]
fn test_free_line_without_sorting_keeps_input_order() {
    let doc = parse_roster(sample_free_line_roster(), &test_config().without_sorting());

    let names: Vec<&str> = doc.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Mint", "Ploy", "Yuki"]);
}

#[test]
fn test_free_line_empty_nationality_goes_to_others() {
    let doc = parse_roster("() Ghost 9 - 5\n(Thai) Mint 10am - 6pm", &test_config());

    assert_eq!(doc.groups[0].key, "others");
    assert_eq!(doc.groups[0].flag, "");
    assert_eq!(doc.records[0].nationality_key, "");
    assert_eq!(doc.records[0].start, Some(at(fallback_day(), 9, 0)));
    assert_eq!(doc.records[0].end, Some(at(fallback_day().succ_opt().unwrap(), 5, 0)));
}
