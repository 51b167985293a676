//! Markdown table export

use crate::models::Record;

const HEADER: &str = "|  | Name | Time | Rate |\n|---|---|---|---|";

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Export records as a Markdown pipe table
pub fn to_markdown(records: &[Record]) -> String {
    let mut lines = vec![HEADER.to_string()];
    lines.extend(records.iter().map(|r| {
        format!(
            "| {} | {} | {} | {} |",
            r.flag,
            cell(&r.name),
            cell(&r.time_label),
            cell(r.rate.as_deref().unwrap_or(""))
        )
    }));
    lines.join("\n")
}
