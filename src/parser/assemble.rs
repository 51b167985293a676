//! Row assembly and nationality grouping
//!
//! Turns raw rows into [`Record`]s, folds them into groups in first-seen key
//! order and derives the roster's overall time span.

use super::clock::{join_time_label, normalize_time_label, parse_clock, parse_time_range, roll_over};
use super::grammar::{RawRow, RawTime};
use super::markup::{extract_link, strip_markup};
use super::tags::{extract_tags, strip_inline_tags};
use super::tokens::{flag_for, normalize_nationality, normalize_rate};
use crate::config::ParseConfig;
use crate::constants::SUMMARY_CLOCK_FORMAT;
use crate::models::{Group, Record};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Assemble one record from a raw row.
///
/// Returns `None` when the row has no usable name.
pub fn assemble_record(
    row: &RawRow,
    day: NaiveDate,
    header_hints: &[String],
    config: &ParseConfig,
) -> Option<Record> {
    let nationality_key = normalize_nationality(&row.nationality);
    let flag = flag_for(&nationality_key).to_string();

    let cell = extract_link(&row.name);
    let mut kept_annotated_name = false;
    let name = if config.strip_inline_tags {
        let stripped = strip_inline_tags(&cell.text, header_hints);
        if stripped.is_empty() {
            kept_annotated_name = true;
            cell.text.clone()
        } else {
            stripped
        }
    } else {
        cell.text.clone()
    };
    if name.is_empty() {
        return None;
    }

    let (time_label, start, end) = match &row.time {
        RawTime::Combined(text) => {
            let label = normalize_time_label(&strip_markup(text));
            let (start, end) = parse_time_range(day, &label);
            (label, start, end)
        }
        RawTime::Split { start, finish } => {
            let start_text = strip_markup(start);
            let finish_text = strip_markup(finish);
            let start = parse_clock(day, &start_text);
            let end = roll_over(start, parse_clock(day, &finish_text));
            (join_time_label(&start_text, &finish_text), start, end)
        }
    };

    let rate = row
        .rate
        .as_deref()
        .and_then(normalize_rate)
        .or_else(|| row.service.as_deref().and_then(normalize_rate));

    let sources = [
        row.service.as_deref().unwrap_or(""),
        row.name.as_str(),
        row.rate.as_deref().unwrap_or(""),
    ];
    let mut tags = extract_tags(&sources, header_hints);
    // A name made only of annotation words stays a name, not a tag
    if kept_annotated_name {
        let in_name = extract_tags(&[name.as_str()], header_hints);
        tags.retain(|tag| !in_name.contains(tag));
    }

    Some(Record {
        name,
        nationality_key,
        flag,
        time_label,
        start,
        end,
        rate,
        tags,
        profile_url: cell.url.or_else(|| row.link.clone()),
    })
}

/// Fold records into groups keyed by nationality, in first-seen key order.
///
/// With `sort_by_start`, a group whose members all carry a start time is
/// stably sorted by it; other groups keep input order.
pub fn group_records(records: Vec<Record>, sort_by_start: bool) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.group_key().to_string();
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                flag: flag_for(&key).to_string(),
                key,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    if sort_by_start {
        for group in groups.iter_mut().filter(|g| g.fully_timed()) {
            group.records.sort_by_key(|r| r.start);
        }
    }

    groups
}

/// Flat record list in group order, then intra-group order
pub fn flatten_groups(groups: &[Group]) -> Vec<Record> {
    groups.iter().flat_map(|g| g.records.iter().cloned()).collect()
}

/// Summarize the roster's span as `HH:MM - HH:MM`, or
/// `HH:MM → next day HH:MM` when it crosses midnight.
pub fn date_summary(records: &[Record]) -> Option<String> {
    let earliest = records.iter().filter_map(|r| r.start).min()?;
    let latest = records.iter().filter_map(|r| r.end).max()?;

    let from = earliest.format(SUMMARY_CLOCK_FORMAT);
    let to = latest.format(SUMMARY_CLOCK_FORMAT);

    if earliest.date() == latest.date() {
        Some(format!("{from} - {to}"))
    } else {
        Some(format!("{from} → next day {to}"))
    }
}
