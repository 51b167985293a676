//! Command-line argument definitions for the roster converter
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::ParseConfig;
use crate::error::{Result, RosterError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the roster converter
///
/// Reads a forum roster post (BBCode tables or one entry per line), groups
/// the entries by nationality and prints or exports them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster_bbcode",
    version,
    about = "Convert forum BBCode rosters into grouped records and CSV, Markdown, BBCode or JSON",
    long_about = "Parses a pasted forum roster in either the [TABLE] BBCode layout or the \
                  '(Nationality) Name start - end rate' line layout, normalizes names, times, \
                  rates and annotation tags, groups entries by nationality and renders the \
                  result as text or one of the export formats."
)]
pub struct Args {
    /// Roster file to read; `-` or absent reads standard input
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Title used when the roster carries no date
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Day (YYYY-MM-DD) used when the roster carries no date
    #[arg(short = 'd', long = "day", value_name = "YYYY-MM-DD")]
    pub day: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of standard output
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print one flat list instead of nationality groups (text format)
    #[arg(long = "flat")]
    pub flat: bool,

    /// Keep input order inside each group
    #[arg(long = "no-sort")]
    pub no_sort: bool,

    /// Keep annotation words such as NEW or VIP in names
    #[arg(long = "keep-inline-tags")]
    pub keep_inline_tags: bool,

    /// Enable verbose logging
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped roster for the terminal
    Text,
    /// Flag,Name,Start,Finish,Rate interchange CSV
    Csv,
    /// Markdown pipe table
    Markdown,
    /// Forum BBCode tables
    Bbcode,
    /// Full parsed document
    Json,
}

impl Args {
    /// Whether input comes from standard input
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }

    /// Validate arguments before reading any input
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() {
            if let Some(path) = &self.input {
                if !path.exists() {
                    return Err(RosterError::InputNotFound { path: path.clone() });
                }
            }
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(RosterError::configuration("--title must not be empty"));
            }
        }

        Ok(())
    }

    /// Build the parse configuration from the arguments
    pub fn to_config(&self) -> Result<ParseConfig> {
        let mut config = ParseConfig::default();

        if let Some(title) = &self.title {
            config = config.with_title(title.trim());
        }
        if let Some(day) = &self.day {
            config = config.with_day(ParseConfig::parse_day(day)?);
        }
        if self.no_sort {
            config = config.without_sorting();
        }
        if self.keep_inline_tags {
            config = config.without_inline_stripping();
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
