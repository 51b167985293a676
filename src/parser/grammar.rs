//! Row-producing contract shared by the input grammars
//!
//! Each grammar segments raw input into [`RawRow`]s independently; the
//! assembler never needs to know which grammar produced a row.

use super::free_line::FreeLineExtractor;
use super::stats::ParseStats;
use super::tabular::TabularExtractor;
use crate::models::RosterGrammar;

/// Time cell(s) of a raw row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTime {
    /// A single `start - end` cell
    Combined(String),
    /// Separate start and finish cells
    Split { start: String, finish: String },
}

/// Cells of one roster entry, markup still attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based position among candidate rows, for diagnostics
    pub index: usize,
    pub nationality: String,
    pub name: String,
    pub time: RawTime,
    pub rate: Option<String>,
    pub service: Option<String>,
    /// Link target recovered before segmentation (free-line grammar)
    pub link: Option<String>,
}

/// Output of a grammar extractor
#[derive(Debug, Clone, Default)]
pub struct ExtractedRows {
    pub rows: Vec<RawRow>,
    pub header_hints: Vec<String>,
    pub stats: ParseStats,
}

/// Segment raw input into candidate rows
pub trait RowSource {
    fn extract(&self, raw: &str) -> ExtractedRows;
}

/// Dispatch to the extractor for `grammar`
pub fn extract_rows(grammar: RosterGrammar, raw: &str) -> ExtractedRows {
    match grammar {
        RosterGrammar::Tabular => TabularExtractor.extract(raw),
        RosterGrammar::FreeLine => FreeLineExtractor.extract(raw),
    }
}
