//! Roster parsing pipeline
//!
//! Raw forum text is classified into one of the [`RosterGrammar`]s, split
//! into raw rows by the matching extractor, and each row is assembled into a
//! [`Record`](crate::models::Record). Records are then grouped by nationality
//! and summarized into a [`RosterDocument`].
//!
//! Parsing never fails. Rows that cannot be assembled are skipped and the
//! reason lands in [`ParseStats`].

pub mod assemble;
pub mod clock;
pub mod free_line;
pub mod grammar;
pub mod markup;
pub mod stats;
pub mod tabular;
pub mod tags;
pub mod title;
pub mod tokens;

#[cfg(test)]
pub mod tests;

pub use assemble::{assemble_record, date_summary, flatten_groups, group_records};
pub use grammar::{ExtractedRows, RawRow, RawTime, RowSource, extract_rows};
pub use stats::ParseStats;
pub use title::{BracketDateResolver, DayResolver, ResolvedDay};

use crate::config::ParseConfig;
use crate::models::{RosterDocument, RosterGrammar};
use tracing::{debug, info};

/// Roster parser with a pluggable day resolver
#[derive(Debug, Clone)]
pub struct RosterParser<R: DayResolver = BracketDateResolver> {
    config: ParseConfig,
    resolver: R,
}

impl RosterParser<BracketDateResolver> {
    /// Create a parser using the default bracket-date resolver
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            resolver: BracketDateResolver,
        }
    }
}

impl<R: DayResolver> RosterParser<R> {
    /// Replace the day resolver
    pub fn with_resolver<T: DayResolver>(self, resolver: T) -> RosterParser<T> {
        RosterParser {
            config: self.config,
            resolver,
        }
    }

    /// Get the parse configuration
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse raw roster text into a document
    pub fn parse(&self, raw: &str) -> RosterDocument {
        let (day, title) = match self.resolver.resolve(raw) {
            Some(resolved) => (resolved.day, resolved.title),
            None => {
                debug!("No roster date found, using fallback title and day");
                (self.config.fallback_day, self.config.fallback_title.clone())
            }
        };

        let grammar = RosterGrammar::detect(raw);
        debug!("Detected {:?} grammar", grammar);

        let ExtractedRows {
            rows,
            header_hints,
            mut stats,
        } = extract_rows(grammar, raw);

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            match assemble_record(row, day, &header_hints, &self.config) {
                Some(record) => {
                    stats.records_parsed += 1;
                    records.push(record);
                }
                None => {
                    debug!("Row {} has no usable name", row.index);
                    stats.skip(format!("Row {}: empty name", row.index));
                }
            }
        }

        let groups = group_records(records, self.config.sort_within_groups);
        let records = flatten_groups(&groups);
        let date_summary = date_summary(&records);

        info!(
            "Parsed '{}': {} records in {} groups ({} of {} rows skipped)",
            title,
            records.len(),
            groups.len(),
            stats.rows_skipped,
            stats.rows_seen
        );

        RosterDocument {
            title,
            day,
            grammar,
            groups,
            records,
            date_summary,
            stats,
        }
    }
}

/// Parse raw roster text with the default resolver
pub fn parse_roster(raw: &str, config: &ParseConfig) -> RosterDocument {
    RosterParser::new(config.clone()).parse(raw)
}
