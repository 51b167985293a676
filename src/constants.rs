//! Application constants for the roster parser
//!
//! This module contains the lookup tables, vocabularies, header keywords and
//! positional defaults used throughout the parsing pipeline.

// =============================================================================
// Grouping
// =============================================================================

/// Group key used for records whose nationality could not be determined
pub const OTHERS_GROUP_KEY: &str = "others";

/// Default title when neither the input nor the caller supplies one
pub const DEFAULT_TITLE: &str = "Roster";

/// Nationality keyword to flag glyph table.
///
/// Lookup is substring based and the first key found wins, so the order of
/// this table is significant: `"vietnamese-chinese"` resolves to the Chinese
/// glyph because `chinese` is listed before `vietnamese`.
pub const FLAG_TABLE: &[(&str, &str)] = &[
    ("japanese", "🇯🇵"),
    ("chinese", "🇨🇳"),
    ("vietnamese", "🇻🇳"),
    ("thai", "🇹🇭"),
    ("turkish", "🇹🇷"),
    ("korean", "🇰🇷"),
    ("taiwanese", "🇹🇼"),
    ("indonesian", "🇮🇩"),
    ("malaysian", "🇲🇾"),
    ("filipina", "🇵🇭"),
    ("filipino", "🇵🇭"),
    ("singaporean", "🇸🇬"),
    ("new zealand", "🇳🇿"),
    ("australian", "🇦🇺"),
    ("brazilian", "🇧🇷"),
    ("colombian", "🇨🇴"),
    ("russian", "🇷🇺"),
];

// =============================================================================
// Annotation Tags
// =============================================================================

/// Canonical annotation labels and the case-insensitive patterns that trigger them.
///
/// Patterns are tested against upper-cased, markup-free text in declaration
/// order; the resulting label list keeps that order. The same patterns strip
/// annotations from display names, so every pattern matches whole words only.
pub const TAG_RULES: &[(&str, &str)] = &[
    ("NEW", r"\bNEW\b"),
    ("TOP", r"\b(?:TOP|PREMIUM|ELITE)\b"),
    ("JAV", r"\bJAV\b"),
    ("VIP", r"\bVIP\b"),
    ("CAME BACK!", r"\b(?:CAME\s*BACK|BACK\s*TODAY|RETURN\w*)\b"),
    ("SPECIAL", r"\bSPECIAL\b"),
];

/// Compound proper names that must survive annotation stripping intact
pub const PROTECTED_PHRASES: &[&str] = &["new zealand"];

// =============================================================================
// Tabular Grammar
// =============================================================================

/// Header keywords for each logical column (case-insensitive substring match)
pub mod header_keys {
    pub const NATIONALITY: &[&str] = &["nationality", "nation", "country"];
    pub const NAME: &[&str] = &["name"];
    pub const START: &[&str] = &["start"];
    pub const FINISH: &[&str] = &["finish", "end"];
    pub const TIME: &[&str] = &["time", "hours", "shift"];
    pub const RATE: &[&str] = &["rate", "price"];
    pub const SERVICE: &[&str] = &["service"];
}

/// Column positions used when a header cell cannot be resolved
pub mod fallback_columns {
    pub const NATIONALITY: usize = 0;
    pub const NAME: usize = 1;
    pub const TIME: usize = 2;

    /// Only applied when the table has no header row at all
    pub const RATE: usize = 3;
}

// =============================================================================
// Interchange Formats
// =============================================================================

/// Timestamp layout used by the CSV interchange export
pub const INTERCHANGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Clock layout used in date-range summaries
pub const SUMMARY_CLOCK_FORMAT: &str = "%H:%M";

/// CSV interchange header
pub const CSV_HEADER: &[&str] = &["Flag", "Name", "Start", "Finish", "Rate"];
