//! Tabular grammar: `[TABLE]` / `[TR]` / `[TD]` blocks
//!
//! The body table is the last table containing a header row (a row carrying
//! a `[SIZE=3]` marker). Header cells are matched against known column
//! keywords; columns that cannot be resolved fall back to fixed positions.

use super::grammar::{ExtractedRows, RawRow, RawTime, RowSource};
use super::markup::strip_markup;
use super::stats::ParseStats;
use super::tags::extract_header_hints;
use crate::constants::{fallback_columns, header_keys};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\[TABLE[^\]]*\](.*?)\[/TABLE\]").expect("valid table regex")
});

static ROW_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[TR[^\]]*\](.*?)\[/TR\]").expect("valid row regex"));

static CELL_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[TD[^\]]*\](.*?)\[/TD\]").expect("valid cell regex"));

static HEADER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\[SIZE=["']?3["']?\]"#).expect("valid header marker regex")
});

/// Where the time of day lives in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumns {
    Combined(usize),
    Split { start: usize, finish: usize },
}

/// Column indices for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub nationality: usize,
    pub name: usize,
    pub time: TimeColumns,
    pub rate: Option<usize>,
    pub service: Option<usize>,
}

impl ColumnLayout {
    /// Layout for tables without a header row
    pub fn positional() -> Self {
        Self {
            nationality: fallback_columns::NATIONALITY,
            name: fallback_columns::NAME,
            time: TimeColumns::Combined(fallback_columns::TIME),
            rate: Some(fallback_columns::RATE),
            service: None,
        }
    }

    /// Resolve columns from header cell texts (markup already stripped)
    pub fn from_header(headers: &[String]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let mut taken: Vec<usize> = Vec::new();
        let mut find = |keys: &[&str]| {
            let index = headers
                .iter()
                .enumerate()
                .find(|(i, h)| !taken.contains(i) && keys.iter().any(|k| h.contains(k)))
                .map(|(i, _)| i);
            if let Some(i) = index {
                taken.push(i);
            }
            index
        };

        let nationality = find(header_keys::NATIONALITY).unwrap_or(fallback_columns::NATIONALITY);
        let name = find(header_keys::NAME).unwrap_or(fallback_columns::NAME);
        let time = match find(header_keys::START) {
            Some(start) => TimeColumns::Split {
                start,
                finish: find(header_keys::FINISH).unwrap_or(start + 1),
            },
            None => TimeColumns::Combined(find(header_keys::TIME).unwrap_or(fallback_columns::TIME)),
        };
        let rate = find(header_keys::RATE);
        let service = find(header_keys::SERVICE);

        Self {
            nationality,
            name,
            time,
            rate,
            service,
        }
    }

    /// Number of cells a row needs to carry every mandatory column
    pub fn required_cells(&self) -> usize {
        let time_max = match self.time {
            TimeColumns::Combined(i) => i,
            TimeColumns::Split { start, finish } => start.max(finish),
        };
        self.nationality.max(self.name).max(time_max) + 1
    }

    /// Build a raw row from cells, or `None` if a mandatory cell is missing
    pub fn row_from_cells(&self, index: usize, cells: &[String]) -> Option<RawRow> {
        if cells.len() < self.required_cells() {
            return None;
        }

        let time = match self.time {
            TimeColumns::Combined(i) => RawTime::Combined(cells[i].clone()),
            TimeColumns::Split { start, finish } => RawTime::Split {
                start: cells[start].clone(),
                finish: cells[finish].clone(),
            },
        };

        Some(RawRow {
            index,
            nationality: cells[self.nationality].clone(),
            name: cells[self.name].clone(),
            time,
            rate: self.rate.and_then(|i| cells.get(i).cloned()),
            service: self.service.and_then(|i| cells.get(i).cloned()),
            link: None,
        })
    }
}

/// Extractor for the tabular grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularExtractor;

impl RowSource for TabularExtractor {
    fn extract(&self, raw: &str) -> ExtractedRows {
        let tables: Vec<Vec<&str>> = TABLE_BLOCK
            .captures_iter(raw)
            .filter_map(|caps| caps.get(1))
            .map(|content| table_rows(content.as_str()))
            .collect();

        let body = tables
            .iter()
            .rev()
            .find_map(|rows| rows.iter().position(|r| is_header_row(r)).map(|h| (rows, Some(h))))
            .or_else(|| tables.last().map(|rows| (rows, None)));

        let Some((rows, header_index)) = body else {
            warn!("No [TABLE] block found in tabular input");
            return ExtractedRows::default();
        };

        let (layout, header_hints, data_rows) = match header_index {
            Some(h) => {
                let header_cells = row_cells(rows[h]);
                let headers: Vec<String> = header_cells.iter().map(|c| strip_markup(c)).collect();
                let hints = header_cells
                    .iter()
                    .flat_map(|c| extract_header_hints(c))
                    .fold(Vec::new(), |mut acc: Vec<String>, hint| {
                        if !acc.contains(&hint) {
                            acc.push(hint);
                        }
                        acc
                    });
                (ColumnLayout::from_header(&headers), hints, &rows[h + 1..])
            }
            None => (ColumnLayout::positional(), Vec::new(), &rows[..]),
        };
        debug!("Column layout: {:?}, header hints: {:?}", layout, header_hints);

        let mut stats = ParseStats::new();
        let mut out = Vec::new();

        for row in data_rows.iter().filter(|r| !is_header_row(r)) {
            stats.rows_seen += 1;
            let cells = row_cells(row);

            match layout.row_from_cells(stats.rows_seen, &cells) {
                Some(raw_row) => out.push(raw_row),
                None => {
                    let reason = format!(
                        "Row {}: {} cells, {} required",
                        stats.rows_seen,
                        cells.len(),
                        layout.required_cells()
                    );
                    debug!("Skipped {}", reason);
                    stats.skip(reason);
                }
            }
        }

        if out.is_empty() {
            warn!("Tabular input produced no data rows");
        }

        ExtractedRows {
            rows: out,
            header_hints,
            stats,
        }
    }
}

fn table_rows(table: &str) -> Vec<&str> {
    ROW_BLOCK
        .captures_iter(table)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn row_cells(row: &str) -> Vec<String> {
    CELL_BLOCK
        .captures_iter(row)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_header_row(row: &str) -> bool {
    HEADER_MARKER.is_match(row)
}
