//! Token extractors for rate and nationality cells

use super::markup::{collapse_whitespace, strip_markup};
use super::tags::map_unprotected;
use crate::constants::FLAG_TABLE;
use regex::Regex;
use std::sync::LazyLock;

static RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\$?\s*\d{2,4}(?:[.,]\d{2})?)\s*(?:/?\s*h?r?)?").expect("valid rate regex")
});

static STRAY_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnew\b").expect("valid stray word regex"));

/// Normalize a rate cell to a compact `[$]NNN[.NN]/H` token.
///
/// Returns `None` when the cell holds no 2-4 digit amount.
pub fn normalize_rate(cell: &str) -> Option<String> {
    let text = strip_markup(cell);
    let caps = RATE.captures(&text)?;

    let mut rate: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
    rate.push_str("/H");
    Some(rate.to_uppercase())
}

/// Normalize a nationality cell into a lower-case grouping key.
///
/// A stray `new` is dropped unless it belongs to a protected compound such
/// as `new zealand`.
pub fn normalize_nationality(cell: &str) -> String {
    let lower = strip_markup(cell).to_lowercase();
    let cleaned = map_unprotected(&lower, |segment| {
        STRAY_NEW.replace_all(segment, "").into_owned()
    });
    collapse_whitespace(&cleaned)
}

/// Decorative flag glyph for a nationality key.
///
/// The first table key contained in `key` wins, in table order.
pub fn flag_for(key: &str) -> &'static str {
    let key = key.to_lowercase();
    FLAG_TABLE
        .iter()
        .find(|(nationality, _)| key.contains(nationality))
        .map(|(_, glyph)| *glyph)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rate_forms() {
        assert_eq!(normalize_rate("300/hr").as_deref(), Some("300/H"));
        assert_eq!(normalize_rate("$320").as_deref(), Some("$320/H"));
        assert_eq!(normalize_rate("[B]$ 280 / h[/B]").as_deref(), Some("$280/H"));
        assert_eq!(normalize_rate("310.50hr").as_deref(), Some("310.50/H"));
        assert_eq!(normalize_rate("ask at desk"), None);
        assert_eq!(normalize_rate(""), None);
    }

    #[test]
    fn test_normalize_rate_is_idempotent() {
        let once = normalize_rate("$300/h").unwrap();
        assert_eq!(normalize_rate(&once).as_deref(), Some(once.as_str()));
    }

    #[test]
    fn test_normalize_nationality() {
        assert_eq!(normalize_nationality("[B] Japanese [/B]"), "japanese");
        assert_eq!(normalize_nationality("NEW   Thai"), "thai");
        assert_eq!(normalize_nationality("New Zealand"), "new zealand");
        assert_eq!(normalize_nationality("new  NEW ZEALAND"), "new zealand");
        assert_eq!(normalize_nationality(""), "");
    }

    #[test]
    fn test_flag_lookup_uses_table_order() {
        assert_eq!(flag_for("japanese"), "🇯🇵");
        assert_eq!(flag_for("vietnamese-chinese"), "🇨🇳");
        assert_eq!(flag_for("chinese-vietnamese"), "🇨🇳");
        assert_eq!(flag_for("new zealand"), "🇳🇿");
        assert_eq!(flag_for("martian"), "");
        assert_eq!(flag_for(""), "");
    }
}
