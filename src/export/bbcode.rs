//! Forum BBCode export in the tabular grammar
//!
//! Output is a title table carrying the weekday and `d/m/yyyy` date, then a
//! body table with a `[SIZE=3]` header row. Tags are appended to the name
//! cell, and labels outside the fixed vocabulary are declared as header
//! hints, so parsing the output again yields the same records.

use crate::constants::TAG_RULES;
use crate::models::{Record, RosterDocument};

fn is_standard_label(tag: &str) -> bool {
    TAG_RULES.iter().any(|(label, _)| *label == tag)
}

/// Labels that need a `(((...)))` header declaration, in first-seen order
fn header_hints(records: &[Record]) -> Vec<&str> {
    let mut hints: Vec<&str> = Vec::new();
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if !is_standard_label(tag) && !hints.contains(&tag.as_str()) {
            hints.push(tag);
        }
    }
    hints
}

fn header_cell(text: &str) -> String {
    format!("[TD][SIZE=3]{text}[/SIZE][/TD]")
}

fn name_cell(record: &Record) -> String {
    let mut cell = match &record.profile_url {
        Some(url) => format!("[URL=\"{url}\"]{}[/URL]", record.name),
        None => record.name.clone(),
    };
    for tag in &record.tags {
        cell.push(' ');
        cell.push_str(tag);
    }
    cell
}

/// Export a document as a BBCode forum post
pub fn to_bbcode(doc: &RosterDocument) -> String {
    let mut out = String::new();

    out.push_str("[TABLE]\n[TR]\n");
    out.push_str(&format!(
        "[TD][B][SIZE=4]{}[/SIZE][/B][/TD]\n",
        doc.day.format("%A")
    ));
    out.push_str(&format!(
        "[TD][SIZE=4]{}[/SIZE][/TD]\n",
        doc.day.format("%-d/%-m/%Y")
    ));
    out.push_str("[/TR]\n[/TABLE]\n\n");

    let hints = header_hints(&doc.records);
    let name_header = if hints.is_empty() {
        "Name".to_string()
    } else {
        format!("Name ((({})))", hints.join(", "))
    };

    out.push_str("[TABLE=\"width: 500\"]\n[TR]\n");
    for header in ["Nationality", name_header.as_str(), "Time", "Rate"] {
        out.push_str(&header_cell(header));
        out.push('\n');
    }
    out.push_str("[/TR]\n");

    for record in &doc.records {
        out.push_str("[TR]\n");
        out.push_str(&format!("[TD]{}[/TD]\n", record.nationality_key));
        out.push_str(&format!("[TD]{}[/TD]\n", name_cell(record)));
        out.push_str(&format!("[TD]{}[/TD]\n", record.time_label));
        out.push_str(&format!(
            "[TD]{}[/TD]\n",
            record.rate.as_deref().unwrap_or("")
        ));
        out.push_str("[/TR]\n");
    }
    out.push_str("[/TABLE]");

    out
}
