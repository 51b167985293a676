//! Roster BBCode Library
//!
//! A Rust library for turning forum roster posts written in bracket-tag
//! markup ("BBCode") into normalized, grouped records.
//!
//! This library provides tools for:
//! - Stripping markup from table cells and recovering profile links
//! - Parsing both the `[TABLE]` layout and the one-entry-per-line layout
//! - Normalizing clock times, rates, nationalities and annotation tags
//! - Grouping entries by nationality in first-seen order
//! - Exporting rosters as CSV, Markdown, BBCode or JSON
//!
//! ```rust
//! use roster_bbcode::{ParseConfig, parse_roster};
//!
//! let doc = parse_roster("(Thai) Mint NEW 10am - 6pm $300", &ParseConfig::default());
//! assert_eq!(doc.records[0].name, "Mint");
//! assert_eq!(doc.records[0].tags, vec!["NEW".to_string()]);
//! assert_eq!(doc.records[0].rate.as_deref(), Some("$300/H"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ParseConfig;
pub use error::{Result, RosterError};
pub use models::{Group, Record, RosterDocument, RosterGrammar};
pub use parser::{ParseStats, RosterParser, parse_roster};
