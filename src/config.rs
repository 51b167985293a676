//! Configuration management and validation.
//!
//! Provides the parse configuration: fallback title and calendar day for
//! inputs without a dated title, and ordering/stripping switches for the
//! row assembler.

use crate::constants::DEFAULT_TITLE;
use crate::error::{Result, RosterError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for a single roster parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Title used when the input carries no recognizable date
    pub fallback_title: String,

    /// Calendar day used to anchor clock times when the input carries no date
    pub fallback_day: NaiveDate,

    /// Sort each group by start time when every member has one
    pub sort_within_groups: bool,

    /// Remove annotation words (NEW, VIP, ...) from display names
    pub strip_inline_tags: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            fallback_title: DEFAULT_TITLE.to_string(),
            fallback_day: Local::now().date_naive(),
            sort_within_groups: true,
            strip_inline_tags: true,
        }
    }
}

impl ParseConfig {
    /// Create configuration anchored on a specific day
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            fallback_day: day,
            ..Self::default()
        }
    }

    /// Set the fallback title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Set the fallback day
    pub fn with_day(mut self, day: NaiveDate) -> Self {
        self.fallback_day = day;
        self
    }

    /// Keep rows in input order inside each group
    pub fn without_sorting(mut self) -> Self {
        self.sort_within_groups = false;
        self
    }

    /// Keep annotation words in display names
    pub fn without_inline_stripping(mut self) -> Self {
        self.strip_inline_tags = false;
        self
    }

    /// Parse a `YYYY-MM-DD` day argument
    pub fn parse_day(value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|e| RosterError::invalid_date(value, e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.fallback_title.trim().is_empty() {
            return Err(RosterError::configuration(
                "fallback title must not be empty",
            ));
        }

        debug!(
            "Parse configuration: title='{}', day={}, sort={}, strip={}",
            self.fallback_title,
            self.fallback_day,
            self.sort_within_groups,
            self.strip_inline_tags
        );

        Ok(())
    }
}
