//! Free-line grammar: one `(Nationality) Name start - end [rate]` entry per line

use super::grammar::{ExtractedRows, RawRow, RawTime, RowSource};
use super::markup::{extract_link, normalize_dashes, strip_markup};
use super::stats::ParseStats;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\((?P<nat>[^)]*)\)\s*(?P<name>.+?)\s+(?P<start>\d{1,2}(?::\d{2})?\s*(?:am|pm)?)\s*-\s*(?P<end>\d{1,2}(?::\d{2})?\s*(?:am|pm)?)(?:\s*[,|@]?\s*(?P<rate>.+))?$",
    )
    .expect("valid free-line regex")
});

/// Extractor for the free-line grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeLineExtractor;

impl FreeLineExtractor {
    /// Match a single line, returning `None` when it is not a roster entry
    pub fn parse_line(index: usize, line: &str) -> Option<RawRow> {
        let link = extract_link(line).url;
        let text = normalize_dashes(&strip_markup(line));
        let caps = LINE.captures(&text)?;

        let rate = caps
            .name("rate")
            .map(|m| m.as_str().trim().to_string())
            .filter(|r| !r.is_empty());

        Some(RawRow {
            index,
            nationality: caps["nat"].to_string(),
            name: caps["name"].to_string(),
            time: RawTime::Split {
                start: caps["start"].to_string(),
                finish: caps["end"].to_string(),
            },
            rate,
            service: None,
            link,
        })
    }
}

impl RowSource for FreeLineExtractor {
    fn extract(&self, raw: &str) -> ExtractedRows {
        let mut stats = ParseStats::new();
        let mut rows = Vec::new();

        for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
            stats.rows_seen += 1;
            match Self::parse_line(stats.rows_seen, line) {
                Some(row) => rows.push(row),
                None => {
                    debug!("Line {} is not a roster entry: {:?}", stats.rows_seen, line);
                    stats.skip(format!("Line {}: no roster entry", stats.rows_seen));
                }
            }
        }

        ExtractedRows {
            rows,
            header_hints: Vec::new(),
            stats,
        }
    }
}
