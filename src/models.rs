//! Core data structures for roster parsing.
//!
//! Defines the input grammars, the normalized record produced for each
//! roster entry, nationality groups and the assembled document handed to
//! rendering and export collaborators.

use crate::constants::OTHERS_GROUP_KEY;
use crate::parser::stats::ParseStats;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Raw input grammars understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterGrammar {
    /// `[TABLE]`/`[TR]`/`[TD]` bracket-tag tables
    Tabular,
    /// One `(Nationality) Name start - end [rate]` entry per line
    FreeLine,
}

impl RosterGrammar {
    /// Detect the grammar from the presence of a table-opening tag
    pub fn detect(raw: &str) -> Self {
        if raw.to_ascii_uppercase().contains("[TABLE") {
            RosterGrammar::Tabular
        } else {
            RosterGrammar::FreeLine
        }
    }
}

/// One roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub nationality_key: String,
    pub flag: String,
    pub time_label: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub rate: Option<String>,
    pub tags: Vec<String>,
    pub profile_url: Option<String>,
}

impl Record {
    /// Key of the group this record belongs to
    pub fn group_key(&self) -> &str {
        if self.nationality_key.is_empty() {
            OTHERS_GROUP_KEY
        } else {
            &self.nationality_key
        }
    }
}

/// Records sharing a nationality key, in first-appearance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub key: String,
    pub flag: String,
    pub records: Vec<Record>,
}

impl Group {
    /// Whether every member carries a parsed start time
    pub fn fully_timed(&self) -> bool {
        self.records.iter().all(|r| r.start.is_some())
    }
}

/// Parsed roster handed to rendering and export collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterDocument {
    pub title: String,
    pub day: NaiveDate,
    pub grammar: RosterGrammar,
    pub groups: Vec<Group>,
    pub records: Vec<Record>,
    pub date_summary: Option<String>,
    pub stats: ParseStats,
}

impl RosterDocument {
    /// Number of records across all groups
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the parse produced no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a group by key
    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.key == key)
    }
}
