//! Parsing statistics for a roster pass
//!
//! Rows that cannot be assembled are skipped rather than failing the pass;
//! these counters record how many and why.

use serde::{Deserialize, Serialize};

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of candidate rows or lines encountered
    pub rows_seen: usize,

    /// Number of records successfully assembled
    pub records_parsed: usize,

    /// Number of rows skipped
    pub rows_skipped: usize,

    /// Reason for each skipped row
    pub skipped: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_seen: 0,
            records_parsed: 0,
            rows_skipped: 0,
            skipped: Vec::new(),
        }
    }

    /// Record a skipped row with its reason
    pub fn skip(&mut self, reason: impl Into<String>) {
        self.rows_skipped += 1;
        self.skipped.push(reason.into());
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.rows_seen as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
