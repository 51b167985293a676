//! Tests for grouping, ordering and date summaries

use super::*;
use crate::parser::{date_summary, flatten_groups, group_records};

#[test]
fn test_groups_follow_first_appearance() {
    let records = vec![
        record("Bo", "korean", None),
        record("Ann", "thai", None),
        record("Bea", "korean", None),
        record("Cy", "japanese", None),
    ];
    let groups = group_records(records, true);

    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["korean", "thai", "japanese"]);
    assert_eq!(groups[0].records.len(), 2);
    assert_eq!(groups[0].flag, "🇰🇷");
}

#[test]
fn test_fully_timed_group_is_sorted() {
    let day = fallback_day();
    let records = vec![
        record("Late", "thai", Some(at(day, 18, 0))),
        record("Early", "thai", Some(at(day, 9, 0))),
        record("Noon", "thai", Some(at(day, 12, 0))),
    ];
    let groups = group_records(records, true);

    let names: Vec<&str> = groups[0].records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Noon", "Late"]);
}

#[test]
fn test_partially_timed_group_keeps_input_order() {
    let day = fallback_day();
    let records = vec![
        record("Late", "thai", Some(at(day, 18, 0))),
        record("Unknown", "thai", None),
        record("Early", "thai", Some(at(day, 9, 0))),
    ];
    let groups = group_records(records, true);

    let names: Vec<&str> = groups[0].records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Late", "Unknown", "Early"]);
}

#[test]
fn test_sort_is_stable_for_equal_starts() {
    let day = fallback_day();
    let records = vec![
        record("First", "thai", Some(at(day, 10, 0))),
        record("Second", "thai", Some(at(day, 10, 0))),
    ];
    let groups = group_records(records, true);

    assert_eq!(groups[0].records[0].name, "First");
    assert_eq!(groups[0].records[1].name, "Second");
}

#[test]
fn test_flatten_follows_group_order() {
    let records = vec![
        record("Bo", "korean", None),
        record("Ann", "", None),
        record("Bea", "korean", None),
    ];
    let groups = group_records(records, false);
    let flat = flatten_groups(&groups);

    assert_eq!(groups[1].key, "others");
    let names: Vec<&str> = flat.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Bea", "Ann"]);
}

#[test]
fn test_date_summary_same_day() {
    let day = fallback_day();
    let mut morning = record("A", "thai", Some(at(day, 9, 30)));
    morning.end = Some(at(day, 17, 0));
    let mut evening = record("B", "thai", Some(at(day, 12, 0)));
    evening.end = Some(at(day, 23, 0));

    assert_eq!(
        date_summary(&[morning, evening]).as_deref(),
        Some("09:30 - 23:00")
    );
}

#[test]
fn test_date_summary_requires_start_and_end() {
    let day = fallback_day();
    assert_eq!(date_summary(&[]), None);
    assert_eq!(date_summary(&[record("A", "thai", Some(at(day, 9, 0)))]), None);
}
