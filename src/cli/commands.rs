//! Command implementation for the roster converter CLI
//!
//! Reads the roster, parses it, renders the requested format and writes the
//! result to standard output or a file.

use crate::cli::args::{Args, OutputFormat};
use crate::export::{to_bbcode, to_csv, to_json, to_markdown};
use crate::models::{Record, RosterDocument};
use crate::parser::{ParseStats, RosterParser};
use anyhow::{Context, Result};
use colored::*;
use std::io::Read;
use tracing::{debug, info, warn};

/// Set up structured logging on stderr so stdout stays clean for exports
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_bbcode={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Main command runner
///
/// 1. Validate arguments and build the parse configuration
/// 2. Read the roster from a file or standard input
/// 3. Parse and render the requested format
/// 4. Write to the output file or standard output
pub fn run(args: Args) -> Result<ParseStats> {
    args.validate()?;
    let config = args.to_config()?;

    let raw = read_input(&args)?;
    let doc = RosterParser::new(config).parse(&raw);

    if doc.is_empty() {
        warn!("No roster entries found in input");
    }

    if args.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = render(&doc, args.format, args.flat)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(
                "Wrote {} records as {:?} to {}",
                doc.record_count(),
                args.format,
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(doc.stats)
}

/// Read the raw roster text
pub fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) if !args.reads_stdin() => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster from {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read roster from standard input")?;
            Ok(raw)
        }
    }
}

/// Render a document in the requested format
pub fn render(doc: &RosterDocument, format: OutputFormat, flat: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(doc, flat),
        OutputFormat::Csv => to_csv(&doc.records)?,
        OutputFormat::Markdown => to_markdown(&doc.records),
        OutputFormat::Bbcode => to_bbcode(doc),
        OutputFormat::Json => to_json(doc)?,
    };
    Ok(rendered)
}

fn record_line(record: &Record, name_width: usize, with_flag: bool) -> String {
    let mut line = String::from("  ");
    if with_flag {
        let flag = if record.flag.is_empty() { "  " } else { record.flag.as_str() };
        line.push_str(flag);
        line.push(' ');
    }
    line.push_str(&format!("{:<width$}", record.name, width = name_width));
    line.push_str(&format!("  {}", record.time_label));
    if let Some(rate) = &record.rate {
        line.push_str(&format!("  {}", rate.bright_green()));
    }
    if !record.tags.is_empty() {
        line.push_str(&format!("  {}", record.tags.join(" ").bright_yellow().bold()));
    }
    line
}

/// Terminal rendering: grouped by nationality, or one flat list
pub fn render_text(doc: &RosterDocument, flat: bool) -> String {
    let mut lines = Vec::new();

    let mut heading = doc.title.bright_white().bold().to_string();
    if let Some(summary) = &doc.date_summary {
        heading.push_str(&format!("  {}", summary.bright_black()));
    }
    lines.push(heading);
    lines.push(String::new());

    let name_width = doc
        .records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    if flat {
        lines.extend(doc.records.iter().map(|r| record_line(r, name_width, true)));
    } else {
        for group in &doc.groups {
            lines.push(format!(
                "{} {} {}",
                group.flag,
                group.key.to_uppercase().bright_cyan().bold(),
                format!("({})", group.records.len()).bright_black()
            ));
            lines.extend(group.records.iter().map(|r| record_line(r, name_width, false)));
        }
    }

    if doc.stats.rows_skipped > 0 {
        lines.push(String::new());
        lines.push(
            format!(
                "{} of {} rows skipped ({:.0}% parsed)",
                doc.stats.rows_skipped,
                doc.stats.rows_seen,
                doc.stats.success_rate()
            )
            .bright_black()
            .to_string(),
        );
    }

    lines.join("\n")
}
