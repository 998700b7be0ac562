//! Pattern catalogue: every textual shape a year can be read from.
//!
//! Patterns carry named `first` / `last` groups wherever two year fragments
//! share a similar digit shape. Flags follow the data they were tuned on:
//! most patterns are case-insensitive (`century`, `B.C.`, `195X`), a few are
//! deliberately case-sensitive (the `to` connector in numeric ranges).
//!
//! Digits are spelled `[0-9]`, never `\d`: Arabic-Indic and other Unicode
//! digits must not match.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("year pattern must compile")
}

// ── Shared fragments ───────────────────────────────────────────────

/// `B.C.`, `BC`, `B. C.`, `b.c`
const BC: &str = r"\s*B\.?\s*C\.?";

/// Connectors between the two halves of a numeric range
const RANGE_CONNECTOR: &str = "(?:-|—|–|to)";

/// Connectors between two ordinals or early numerals
const ORDINAL_CONNECTOR: &str = "(?:-|–|or|to)";

/// `17th-18th century`, `ca. 9th–8th century`, `17th or 18th century?`
const CENTURY_SPAN: &str =
    r"(?P<first>[0-9]{1,2})(?:[a-z]{2})?\s*(?:-|–|or|to)\s*(?P<last>[0-9]{1,2})(?:[a-z]{2})?\s+centur.*";

/// `between 1694 and 1799?`
const BETWEEN: &str = r"between\s+(?P<first>[0-9]{1,4})\??\s+and\s+(?P<last>[0-9]{1,4})\??";

/// `5th century`, `11 century`
const CENTURY_WORD: &str = r"(?P<nth>[0-9]{1,2})(?:[a-z]{2})?\s*century";

/// Two-digit century with a two-character wildcard: `17uu`, `17--`
const CENTURY_MARKER: &str = r"[0-9]{1,2}[u\-]{2}";

/// Same shape, also accepting plain digits: `1598`, `17--`
const YEAR_OR_CENTURY_MARKER: &str = r"[0-9]{1,2}[u\-0-9]{2}";

// ── B.C. forms ─────────────────────────────────────────────────────

/// `ca. 13th–12th century B.C.`
pub static CENTURY_SPAN_BC: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("(?is){CENTURY_SPAN}{BC}")));

/// `between 300 and 150 B.C.`
pub static BETWEEN_BC: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("(?is){BETWEEN}{BC}")));

/// `5th century B.C.`
pub static CENTURY_WORD_BC: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?is){CENTURY_WORD}\s+{BC}")));

/// `800 B.C.`
pub static YEAR_BC: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?is)(?P<year>[0-9]{{1,4}}){BC}")));

// ── Range forms ────────────────────────────────────────────────────

/// ISO-like interval with a slash: `2023-01-02T19:20:30+01:00/2025-01-01`
pub static SLASH_INTERVAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)\b(?P<first>[0-9]{4})\b.*?/.*?\b(?P<last>[0-9]{4})\b"));

/// `between 1000 and 2000`
pub static BETWEEN_YEARS: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("(?is){BETWEEN}")));

/// `1496-1499`, `1750?-1867`, `1980s - 1990s`
pub static HYPHEN_FOUR_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?P<first>[0-9]{{3,4}})s?\??\s*{RANGE_CONNECTOR}\s*(?P<last>[0-9]{{4}}s?)\??"
    ))
});

/// `1757-58`, `1675?-76?`
pub static HYPHEN_TWO_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?m)(?P<first>[0-9]{{3,4}})\??\s*{RANGE_CONNECTOR}\s*(?P<last>[0-9]{{2}})\??([^\-0-9].*)?$"
    ))
});

/// `1965-8`
pub static HYPHEN_ONE_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?m)(?P<first>[0-9]{{3,4}})\??\s*{RANGE_CONNECTOR}\s*(?P<last>[0-9])\??([^\-0-9].*)?$"
    ))
});

/// `17--?-18--?`
pub static CENTURY_MARKER_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?ims)(?P<first>{CENTURY_MARKER})\??\s*{RANGE_CONNECTOR}\s*(?P<last>{CENTURY_MARKER})\??([^u\-]|$)??"
    ))
});

/// `1835 or 1836`, `17-- or 18--`
pub static YEAR_OR_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?ims)(?P<first>{YEAR_OR_CENTURY_MARKER})\??\s*or\s*(?P<last>{YEAR_OR_CENTURY_MARKER})\??([^u\-]|$)??"
    ))
});

/// `17th or 18th century`, `ca. 5th–6th century A.D.`
pub static CENTURY_SPAN_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("(?is){CENTURY_SPAN}")));

// ── Numeric-context forms ──────────────────────────────────────────

/// A bracket squeezed between two digits: `169[5]`, `[18]91`
pub static BRACKET_BETWEEN_DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"[0-9][\[\]][0-9]"));

/// `-1865` at the start of the text
pub static LEADING_NEGATIVE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^(?P<year>-[0-9]{4})"));

/// `-1500 - -1400`, captures the second year
pub static NEGATIVE_YEAR_AFTER_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"-[0-9]{{4}}\s*{ORDINAL_CONNECTOR}\s*(?P<year>-[0-9]{{4}})"))
});

/// Four consecutive digits anywhere
pub static FOUR_DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?P<year>[0-9]{4})"));

/// Bare short numerals: `5`, `945`, `-18`
pub static EARLY_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)^-?[0-9]{1,3}([^0-9u\[]|$)"));

/// A lone negative four-digit year: `-1666`
pub static EARLY_NEGATIVE_FOUR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^-[0-9]{4}([^0-9u\-\[]|$)$"));

/// Early numeral ranges: `-5 - 10`, `150 to 300`
pub static EARLY_NUMERIC_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?im)^(?P<first>-?[0-9]{{1,3}})\??\s*{ORDINAL_CONNECTOR}\s*(?P<last>-?[0-9]{{1,4}})\??([^0-9u\-\[]|$)"
    ))
});

// ── Decade and century forms ───────────────────────────────────────

/// `1950s`, `1950's`
pub static DECADE_APOSTROPHE_S: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)(^|[^0-9])[0-9]{3}0'?s($|[^0-9])"));

/// The `0s` / `0's` suffix inside a decade match
pub static DECADE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"0'?s"));

/// `199u`, `167-?`, `186?`, `195x`
pub static DECADE_WILDCARD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)(^|[^0-9])[0-9]{3}[u\-?x]($|[^0-9])"));

/// `17uu`, `17--`, `17--?`
pub static CENTURY_WILDCARD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)(?P<century>[0-9]{1,2})[u\-]{2}([^u\-]|$)"));

/// `18th century`
pub static CENTURY_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("(?i){CENTURY_WORD}")));

// ── Calendar-style forms ───────────────────────────────────────────

/// `1/2/79`
pub static SHORT_DATE_SLASH: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})/(?P<year>[0-9]{2})$")
});

/// `5-1-59`
pub static SHORT_DATE_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})-(?P<year>[0-9]{2})$")
});
