//! Annotation tag extraction and inline annotation stripping
//!
//! Promotional words such as `NEW` or `VIP` are surfaced as tags and removed
//! from the visible name. Header hints (`(((LABEL)))` in a header cell) add
//! caller-supplied labels to both passes. Protected compounds such as
//! `New Zealand` are never touched by either pass.

use super::markup::{collapse_whitespace, strip_markup};
use crate::constants::{PROTECTED_PHRASES, TAG_RULES};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static PROTECTED: LazyLock<Regex> = LazyLock::new(|| {
    let phrases: Vec<String> = PROTECTED_PHRASES
        .iter()
        .map(|p| {
            p.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", phrases.join("|"))).expect("valid protected regex")
});

static TAG_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TAG_RULES
        .iter()
        .map(|(label, pattern)| {
            let regex = Regex::new(&format!("(?i){pattern}")).expect("valid tag rule regex");
            (*label, regex)
        })
        .collect()
});

/// Every tag rule in one alternation, swallowing trailing `!`s
static ANNOTATIONS: LazyLock<Regex> = LazyLock::new(|| {
    let rules: Vec<String> = TAG_RULES
        .iter()
        .map(|(_, pattern)| format!("(?:{pattern})"))
        .collect();
    Regex::new(&format!("(?i)(?:{})!*", rules.join("|"))).expect("valid annotation regex")
});

static HEADER_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\(\(\s*([^)]+?)\s*\)\)\)").expect("valid header hint regex")
});

static HINT_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s|/]+").expect("valid hint separator regex"));

/// Apply `f` to every part of `text` outside protected phrases.
///
/// Protected phrases are copied through verbatim, so `new zealand` keeps its
/// `new` whatever `f` strips.
pub fn map_unprotected<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in PROTECTED.find_iter(text) {
        out.push_str(&f(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&f(&text[last..]));
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word pattern for a literal label; word boundaries only on word edges
fn whole_word_pattern(word: &str) -> String {
    let escaped = word
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let lead = if word.starts_with(is_word_char) { r"\b" } else { "" };
    let trail = if word.ends_with(is_word_char) { r"\b" } else { "" };
    format!("{lead}{escaped}{trail}")
}

/// Case-insensitive alternation of whole words, swallowing trailing `!`s
fn alternation_pattern<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let alternatives: Vec<String> = words.map(whole_word_pattern).collect();
    format!("(?i)(?:{})!*", alternatives.join("|"))
}

/// Extract header hint labels from a header cell.
///
/// `(((NEW, GFE | Duo/Couple)))` yields `["NEW", "GFE", "DUO", "COUPLE"]`.
pub fn extract_header_hints(header_cell: &str) -> Vec<String> {
    let mut hints: Vec<String> = Vec::new();

    for caps in HEADER_HINT.captures_iter(header_cell) {
        for token in HINT_SEPARATORS.split(&caps[1]) {
            let token = token.trim().to_uppercase();
            if !token.is_empty() && !hints.contains(&token) {
                hints.push(token);
            }
        }
    }

    hints
}

/// Extract annotation tags from the combined text of `sources`.
///
/// Fixed rules run first in declaration order, then each header hint as a
/// whole-word pattern. Labels are deduplicated in first-match order.
pub fn extract_tags(sources: &[&str], header_hints: &[String]) -> Vec<String> {
    let combined = sources
        .iter()
        .map(|s| strip_markup(s))
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    let text = PROTECTED.replace_all(&combined, " ");

    let mut tags: Vec<String> = Vec::new();
    let mut add = |label: &str| {
        if !tags.iter().any(|t| t == label) {
            tags.push(label.to_string());
        }
    };

    for (label, pattern) in TAG_PATTERNS.iter() {
        if pattern.is_match(&text) {
            add(*label);
        }
    }

    for hint in header_hints {
        match Regex::new(&format!("(?i){}", whole_word_pattern(hint))) {
            Ok(pattern) if pattern.is_match(&text) => add(hint.as_str()),
            Ok(_) => {}
            Err(e) => debug!("Ignoring header hint '{}': {}", hint, e),
        }
    }

    tags
}

/// Remove annotation words and header hints from a display name.
///
/// Uses the tag rules themselves, so any word that yields a tag is removed.
pub fn strip_inline_tags(name: &str, header_hints: &[String]) -> String {
    let hint_pattern = if header_hints.is_empty() {
        None
    } else {
        Regex::new(&alternation_pattern(header_hints.iter().map(String::as_str))).ok()
    };

    let stripped = map_unprotected(name, |segment| {
        let segment = ANNOTATIONS.replace_all(segment, "");
        match &hint_pattern {
            Some(pattern) => pattern.replace_all(&segment, "").into_owned(),
            None => segment.into_owned(),
        }
    });

    collapse_whitespace(&stripped)
}
