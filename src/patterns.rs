//! Process-wide constant tables for placeholder detection.
//!
//! Everything here is immutable static data: the forbidden-pattern
//! taxonomy scanned against generated text, the generic-name lists used by
//! name validation, and the per-field-category minimum lengths. No runtime
//! mutation path exists.

use std::sync::LazyLock;

use regex::Regex;

/// A compiled forbidden-text pattern with its taxonomy category.
pub struct ForbiddenPattern {
    /// Taxonomy label cited in error messages.
    pub category: &'static str,
    /// Compiled case-insensitive pattern (`None` if the literal failed to
    /// compile, in which case the pattern is skipped during scans).
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! content_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Placeholder markers ────────────────────────────────────────────────────
content_pattern!(RE_TBD, r"(?i)\btbd\b");
content_pattern!(RE_TO_BE_DETERMINED, r"(?i)\bto be (?:determined|decided|announced)\b");
content_pattern!(RE_TODO, r"(?i)\btodo\b");
content_pattern!(RE_FIXME, r"(?i)\bfixme\b");
content_pattern!(RE_PLACEHOLDER, r"(?i)\bplace\s?holder\b");
content_pattern!(RE_LOREM, r"(?i)\blorem ipsum\b");

// ── Fallback markers ───────────────────────────────────────────────────────
content_pattern!(RE_NA, r"(?i)\bn/a\b");
content_pattern!(RE_NOT_AVAILABLE, r"(?i)\bnot (?:available|applicable|specified|provided)\b");
content_pattern!(RE_UNKNOWN, r"(?i)\bunknown\b");
content_pattern!(RE_UNTITLED, r"(?i)\buntitled\b");

// ── Generic numbered labels ("Location 1", "Character 2") ─────────────────
content_pattern!(
    RE_NUMBERED_LABEL,
    r"(?i)\b(?:character|location|place|person|item|scene|episode|chapter)\s+\d+\b"
);

// ── Bracket-delimited template tokens ("[insert name]", "[LOCATION]") ─────
content_pattern!(
    RE_TEMPLATE_TOKEN,
    r"(?i)\[\s*(?:insert|your|add|fill|example|sample|placeholder|name|title|description|location|character|tbd|todo)[^\]]*\]"
);

/// Ordered set of text patterns indicating generic, fallback, or
/// placeholder content. Scanned case-insensitively against every string
/// reachable from a candidate value.
pub static FORBIDDEN_PATTERNS: &[ForbiddenPattern] = &[
    ForbiddenPattern { category: "placeholder", regex: &RE_TBD },
    ForbiddenPattern { category: "placeholder", regex: &RE_TO_BE_DETERMINED },
    ForbiddenPattern { category: "placeholder", regex: &RE_TODO },
    ForbiddenPattern { category: "placeholder", regex: &RE_FIXME },
    ForbiddenPattern { category: "placeholder", regex: &RE_PLACEHOLDER },
    ForbiddenPattern { category: "placeholder", regex: &RE_LOREM },
    ForbiddenPattern { category: "fallback", regex: &RE_NA },
    ForbiddenPattern { category: "fallback", regex: &RE_NOT_AVAILABLE },
    ForbiddenPattern { category: "fallback", regex: &RE_UNKNOWN },
    ForbiddenPattern { category: "fallback", regex: &RE_UNTITLED },
    ForbiddenPattern { category: "generic label", regex: &RE_NUMBERED_LABEL },
    ForbiddenPattern { category: "template token", regex: &RE_TEMPLATE_TOKEN },
];

// ── Generic name patterns (anchored, exact or prefix-plus-number) ─────────
content_pattern!(RE_NAME_CHARACTER_N, r"(?i)^character(?:\s+\d+)?$");
content_pattern!(RE_NAME_MAIN_CHARACTER, r"(?i)^main character$");
content_pattern!(RE_NAME_PROTAGONIST, r"(?i)^protagonist(?:\s+\d+)?$");
content_pattern!(RE_NAME_ANTAGONIST, r"(?i)^antagonist(?:\s+\d+)?$");
content_pattern!(RE_NAME_PERSON_N, r"(?i)^person\s+\d+$");
content_pattern!(RE_NAME_UNNAMED, r"(?i)^unnamed(?:\s+character)?$");

content_pattern!(RE_NAME_LOCATION_N, r"(?i)^location(?:\s+\d+)?$");
content_pattern!(RE_NAME_PLACE_X, r"(?i)^place(?:\s+[a-z0-9]+)?$");
content_pattern!(RE_NAME_SETTING_N, r"(?i)^setting(?:\s+\d+)?$");
content_pattern!(RE_NAME_CITY_N, r"(?i)^(?:city|town|area)\s+\d+$");
content_pattern!(RE_NAME_SOMEWHERE, r"(?i)^somewhere$");
content_pattern!(RE_NAME_UNKNOWN_LOCATION, r"(?i)^unknown(?:\s+location)?$");

/// Generic character-name patterns rejected by name-list validation.
pub static GENERIC_CHARACTER_NAMES: &[&LazyLock<Option<Regex>>] = &[
    &RE_NAME_CHARACTER_N,
    &RE_NAME_MAIN_CHARACTER,
    &RE_NAME_PROTAGONIST,
    &RE_NAME_ANTAGONIST,
    &RE_NAME_PERSON_N,
    &RE_NAME_UNNAMED,
];

/// Generic location-name patterns rejected by name-list validation.
pub static GENERIC_LOCATION_NAMES: &[&LazyLock<Option<Regex>>] = &[
    &RE_NAME_LOCATION_N,
    &RE_NAME_PLACE_X,
    &RE_NAME_SETTING_N,
    &RE_NAME_CITY_N,
    &RE_NAME_SOMEWHERE,
    &RE_NAME_UNKNOWN_LOCATION,
];

/// Minimum character counts by semantic field category.
///
/// Matched by substring against the (lowercased) field name; first match
/// wins, so identifier-like categories come first.
pub static FIELD_MIN_LENGTHS: &[(&str, usize)] = &[
    ("name", 2),
    ("id", 2),
    ("key", 2),
    ("code", 2),
    ("title", 3),
    ("genre", 3),
    ("summary", 10),
    ("description", 10),
    ("premise", 10),
    ("synopsis", 10),
    ("outline", 10),
];

/// Minimum length when no category matches the field name.
pub const DEFAULT_MIN_LENGTH: usize = 10;

/// Minimum length for identifier-like mapping values.
pub const IDENTIFIER_MIN_LENGTH: usize = 2;

/// Relaxed minimum for non-identifier mapping values one level down.
pub const PROSE_MIN_LENGTH: usize = 5;

/// Minimum length for string elements inside lists (single words pass).
pub const LIST_ITEM_MIN_LENGTH: usize = 2;

/// Key tokens that mark a mapping field as identifier-like.
pub static IDENTIFIER_TOKENS: &[&str] = &["name", "id", "key", "code"];

/// Looks up the minimum length for a field by semantic category.
#[must_use]
pub fn min_length_for(field_name: &str) -> usize {
    let lowered = field_name.to_lowercase();
    FIELD_MIN_LENGTHS
        .iter()
        .find(|(category, _)| lowered.contains(category))
        .map_or(DEFAULT_MIN_LENGTH, |(_, min)| *min)
}

/// Whether a mapping key names an identifier-like field (name/id/key/code).
#[must_use]
pub fn is_identifier_field(field_name: &str) -> bool {
    let lowered = field_name.to_lowercase();
    IDENTIFIER_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Scans text against every forbidden pattern, returning one
/// `(category, matched_text)` entry per matching pattern.
#[must_use]
pub fn forbidden_matches(text: &str) -> Vec<(&'static str, String)> {
    FORBIDDEN_PATTERNS
        .iter()
        .filter_map(|pattern| {
            pattern
                .regex
                .as_ref()
                .and_then(|re| re.find(text))
                .map(|found| (pattern.category, found.as_str().to_string()))
        })
        .collect()
}

/// Whether a name matches any generic pattern for its category.
#[must_use]
pub fn is_generic_name(name: &str, patterns: &[&LazyLock<Option<Regex>>]) -> bool {
    patterns
        .iter()
        .any(|p| p.as_ref().is_some_and(|re| re.is_match(name)))
}
