//! Roster exporters
//!
//! Renders a parsed [`RosterDocument`](crate::models::RosterDocument) or its
//! flat record list into interchange and display formats.
//!
//! # Formats
//!
//! - [`interchange`] - CSV with `Flag,Name,Start,Finish,Rate` columns
//! - [`markdown`] - pipe table for chat and documentation
//! - [`bbcode`] - forum table in the tabular grammar; parsing it again
//!   reproduces the same records
//! - [`json`] - the whole document, pretty printed
//!
//! # Usage
//!
//! ```rust
//! use roster_bbcode::{ParseConfig, parse_roster};
//! use roster_bbcode::export::{to_csv, to_markdown};
//!
//! # fn example() -> roster_bbcode::Result<()> {
//! let doc = parse_roster("(Thai) Mint 10am - 6pm $300", &ParseConfig::default());
//! let csv = to_csv(&doc.records)?;
//! let table = to_markdown(&doc.records);
//! assert!(csv.starts_with("Flag,Name,Start,Finish,Rate"));
//! assert!(table.contains("| Mint |"));
//! # Ok(())
//! # }
//! ```

pub mod bbcode;
pub mod interchange;
pub mod json;
pub mod markdown;

#[cfg(test)]
mod tests;

pub use bbcode::to_bbcode;
pub use interchange::to_csv;
pub use json::to_json;
pub use markdown::to_markdown;
