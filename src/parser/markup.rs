//! Bracket-tag markup stripping for single cells
//!
//! Recognized style and table tags are removed, labeled links collapse to
//! their label, and whitespace is normalized. Tags outside the recognized
//! set pass through untouched so one odd cell cannot sink a roster.

use regex::Regex;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\[URL=["']?([^"'\]]+)["']?\]([^\[]+)\[/URL\]"#).expect("valid link regex")
});

static STYLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[/?(?:SIZE|B|I|U|COLOR|FONT|CENTER|TABLE|TR|TD|URL)\b[^\]]*\]")
        .expect("valid style tag regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Plain text of a cell plus the target of its labeled link, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub text: String,
    pub url: Option<String>,
}

/// Collapse whitespace runs to a single space and trim
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Replace unicode dash variants with an ASCII hyphen
pub fn normalize_dashes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Strip recognized markup from a cell and normalize whitespace
pub fn strip_markup(s: &str) -> String {
    let unlinked = LINK.replace_all(s, "${2}");
    let untagged = STYLE_TAG.replace_all(&unlinked, "");
    collapse_whitespace(&untagged)
}

/// Stripped text of a cell plus the target of its first labeled link
pub fn extract_link(cell: &str) -> CellText {
    CellText {
        text: strip_markup(cell),
        url: LINK.captures(cell).map(|caps| caps[1].trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_style_tags() {
        assert_eq!(
            strip_markup("[TD][B][SIZE=4]  Saturday [/SIZE][/B][/TD]"),
            "Saturday"
        );
        assert_eq!(
            strip_markup("[color=#000000]6/9/2025[/color]"),
            "6/9/2025"
        );
    }

    #[test]
    fn test_strip_markup_collapses_links() {
        assert_eq!(
            strip_markup(r#"[URL="https://example.com/ami"]Ami[/URL]"#),
            "Ami"
        );
        assert_eq!(
            strip_markup("[url=https://example.com/ami]Ami NEW[/url]"),
            "Ami NEW"
        );
    }

    #[test]
    fn test_strip_markup_keeps_unknown_tags() {
        assert_eq!(strip_markup("[SPOILER]Yuki[/SPOILER]"), "[SPOILER]Yuki[/SPOILER]");
        // [BACK] is not [B]
        assert_eq!(strip_markup("[BACK]x"), "[BACK]x");
    }

    #[test]
    fn test_extract_link() {
        let cell = extract_link(
            r#"[TD][URL="https://example.com/profile/hinata-1/?utm_source=a99"] Hinata [/URL][/TD]"#,
        );
        assert_eq!(cell.text, "Hinata");
        assert_eq!(
            cell.url.as_deref(),
            Some("https://example.com/profile/hinata-1/?utm_source=a99")
        );

        let trailing = extract_link("[URL=https://example.com/hazel]Hazel[/URL] new");
        assert_eq!(trailing.text, "Hazel new");
        assert_eq!(trailing.url.as_deref(), Some("https://example.com/hazel"));

        let plain = extract_link("[TD][B]Rina[/B][/TD]");
        assert_eq!(plain.text, "Rina");
        assert_eq!(plain.url, None);
    }

    #[test]
    fn test_normalize_dashes() {
        assert_eq!(normalize_dashes("10 am \u{2013} 10 pm"), "10 am - 10 pm");
        assert_eq!(normalize_dashes("9\u{2014}5"), "9-5");
    }
}
