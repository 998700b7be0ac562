//! Year extractors: turn a pattern match into a candidate year.
//!
//! Extractors only read the text. Bounds checks and the recursive resolution
//! of range tails live with the cascade in `rules`.

use chrono::{Datelike, NaiveDate};
use regex::Captures;

use crate::consts::{
    BRACKETS, CENTURY_SPAN, DECADE_WILDCARDS, LAST_IN_CENTURY, SHORT_YEAR_CENTURY,
};
use crate::patterns::{
    BETWEEN_BC, BETWEEN_YEARS, BRACKET_BETWEEN_DIGITS, CENTURY_MARKER_SPAN, CENTURY_SPAN_BC,
    CENTURY_SPAN_WORDS, CENTURY_WILDCARD, CENTURY_WORD_BC, CENTURY_WORDS, DECADE_APOSTROPHE_S,
    DECADE_SUFFIX, DECADE_WILDCARD, EARLY_NEGATIVE_FOUR_DIGIT, EARLY_NUMERIC, EARLY_NUMERIC_SPAN,
    FOUR_DIGITS, HYPHEN_FOUR_DIGIT, HYPHEN_ONE_DIGIT, HYPHEN_TWO_DIGIT, LEADING_NEGATIVE_YEAR,
    NEGATIVE_YEAR_AFTER_HYPHEN, SHORT_DATE_HYPHEN, SHORT_DATE_SLASH, SLASH_INTERVAL, YEAR_BC,
    YEAR_OR_YEAR,
};
use crate::types::leading_int;

/// Which end of a two-year pattern to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    First,
    Last,
}

impl End {
    const fn group(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

fn group_int(caps: &Captures<'_>, name: &str) -> Option<i32> {
    caps.name(name).and_then(|m| leading_int(m.as_str()))
}

const fn first_year_of_century(nth: i32) -> i32 {
    (nth - 1) * CENTURY_SPAN
}

const fn last_year_of_century(nth: i32) -> i32 {
    (nth - 1) * CENTURY_SPAN + LAST_IN_CENTURY
}

// ── B.C. ───────────────────────────────────────────────────────────

/// `9th–8th century B.C.`: -999 for the first end, -800 for the last
pub fn century_span_bc(text: &str, end: End) -> Option<i32> {
    let caps = CENTURY_SPAN_BC.captures(text)?;
    let nth = group_int(&caps, end.group())?;
    Some(match end {
        End::First => -(nth * CENTURY_SPAN) - LAST_IN_CENTURY,
        End::Last => -(nth * CENTURY_SPAN),
    })
}

/// `between 300 and 150 B.C.`: -300 / -150
pub fn between_bc(text: &str, end: End) -> Option<i32> {
    let caps = BETWEEN_BC.captures(text)?;
    group_int(&caps, end.group()).map(|year| -year)
}

/// `5th century B.C.`: -599 / -500
pub fn century_word_bc(text: &str, end: End) -> Option<i32> {
    let caps = CENTURY_WORD_BC.captures(text)?;
    let nth = group_int(&caps, "nth")?;
    Some(match end {
        End::First => -(nth * CENTURY_SPAN) - LAST_IN_CENTURY,
        End::Last => -(nth * CENTURY_SPAN),
    })
}

/// `800 B.C.`: -800
pub fn year_bc(text: &str) -> Option<i32> {
    let caps = YEAR_BC.captures(text)?;
    group_int(&caps, "year").map(|year| -year)
}

// ── Ranges ─────────────────────────────────────────────────────────

/// Either end of a slash-delimited interval
pub fn slash_interval(text: &str, end: End) -> Option<i32> {
    let caps = SLASH_INTERVAL.captures(text)?;
    group_int(&caps, end.group())
}

/// Either end of `between X and Y`
pub fn between(text: &str, end: End) -> Option<i32> {
    let caps = BETWEEN_YEARS.captures(text)?;
    group_int(&caps, end.group())
}

/// First year of `yyyy-yyyy`
pub fn hyphen_four_digit_first(text: &str) -> Option<i32> {
    let caps = HYPHEN_FOUR_DIGIT.captures(text)?;
    group_int(&caps, "first")
}

/// Raw tail of `yyyy-yyyy`, which may carry a decade suffix (`1990s`)
pub fn hyphen_four_digit_tail(text: &str) -> Option<&str> {
    HYPHEN_FOUR_DIGIT
        .captures(text)
        .and_then(|caps| caps.name("last"))
        .map(|m| m.as_str())
}

/// `1757-58`: the first year and the tail completed with the first year's century
pub fn hyphen_two_digit(text: &str) -> Option<(i32, i32)> {
    let caps = HYPHEN_TWO_DIGIT.captures(text)?;
    borrow_prefix(caps.name("first")?.as_str(), caps.name("last")?.as_str())
}

/// `1675-7`: the first year and the tail completed with the first year's decade
pub fn hyphen_one_digit(text: &str) -> Option<(i32, i32)> {
    let caps = HYPHEN_ONE_DIGIT.captures(text)?;
    borrow_prefix(caps.name("first")?.as_str(), caps.name("last")?.as_str())
}

/// Replaces the trailing digits of `first` with `tail`
fn borrow_prefix(first: &str, tail: &str) -> Option<(i32, i32)> {
    let prefix = first.get(..first.len().checked_sub(tail.len())?)?;
    let last = format!("{prefix}{tail}");
    Some((leading_int(first)?, leading_int(&last)?))
}

/// Last year of `17--?-18--?`
pub fn century_marker_span_last(text: &str) -> Option<i32> {
    let caps = CENTURY_MARKER_SPAN.captures(text)?;
    century_wildcard(caps.name("last")?.as_str(), End::Last)
}

/// Raw second half of `X or Y`
pub fn or_tail(text: &str) -> Option<&str> {
    YEAR_OR_YEAR
        .captures(text)
        .and_then(|caps| caps.name("last"))
        .map(|m| m.as_str())
}

/// Last year of `17th or 18th century`: 1799
pub fn century_span_last(text: &str) -> Option<i32> {
    let caps = CENTURY_SPAN_WORDS.captures(text)?;
    group_int(&caps, "last").map(last_year_of_century)
}

/// Second year of `-1500 - -1400`
pub fn negative_year_after_hyphen(text: &str) -> Option<i32> {
    let caps = NEGATIVE_YEAR_AFTER_HYPHEN.captures(text)?;
    group_int(&caps, "year")
}

// ── Single years ───────────────────────────────────────────────────

/// `-1865` at the very start
pub fn leading_negative_year(text: &str) -> Option<i32> {
    let caps = LEADING_NEGATIVE_YEAR.captures(text)?;
    group_int(&caps, "year")
}

/// The first run of four digits, kept as text so `0700` stays recognizable
pub fn first_four_digits(text: &str) -> Option<&str> {
    FOUR_DIGITS.find(text).map(|m| m.as_str())
}

fn first_four_digits_int(text: &str) -> Option<i32> {
    first_four_digits(text).and_then(leading_int)
}

/// `m/d/yy` or `m-d-yy`. The year is read in the 2000s and pushed back a
/// century when that would put the date after `today`.
pub fn month_day_short_year(text: &str, today: NaiveDate) -> Option<i32> {
    let caps = SHORT_DATE_SLASH
        .captures(text)
        .or_else(|| SHORT_DATE_HYPHEN.captures(text))?;
    let month = caps.name("month")?.as_str().parse::<u32>().ok()?;
    let day = caps.name("day")?.as_str().parse::<u32>().ok()?;
    let year = SHORT_YEAR_CENTURY + caps.name("year")?.as_str().parse::<i32>().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let date = if date > today {
        NaiveDate::from_ymd_opt(year - CENTURY_SPAN, month, day)?
    } else {
        date
    };
    Some(date.year())
}

// ── Decades and centuries ──────────────────────────────────────────

/// Last year of `1950s` / `1950's`
pub fn decade_apostrophe_last(text: &str) -> Option<i32> {
    let matched = DECADE_APOSTROPHE_S.find(text)?.as_str();
    let nines = DECADE_SUFFIX.replace(matched, "9");
    first_four_digits_int(&nines)
}

/// `199u`: 1990 for the first end, 1999 for the last
pub fn decade_wildcard(text: &str, end: End) -> Option<i32> {
    let matched = DECADE_WILDCARD.find(text)?.as_str();
    let fill = match end {
        End::First => '0',
        End::Last => '9',
    };
    let filled: String = matched
        .chars()
        .map(|c| if DECADE_WILDCARDS.contains(&c) { fill } else { c })
        .collect();
    first_four_digits_int(&filled)
}

/// `17uu`, `17--`: 1700 / 1799
pub fn century_wildcard(text: &str, end: End) -> Option<i32> {
    let caps = CENTURY_WILDCARD.captures(text)?;
    let century = group_int(&caps, "century")?;
    Some(match end {
        End::First => century * CENTURY_SPAN,
        End::Last => century * CENTURY_SPAN + LAST_IN_CENTURY,
    })
}

/// `18th century`: 1700 / 1799
pub fn century_words(text: &str, end: End) -> Option<i32> {
    let caps = CENTURY_WORDS.captures(text)?;
    let nth = group_int(&caps, "nth")?;
    Some(match end {
        End::First => first_year_of_century(nth),
        End::Last => last_year_of_century(nth),
    })
}

/// First year of any century form, B.C. word form included
pub fn century_first(text: &str) -> Option<i32> {
    if let Some(year) = century_word_bc(text, End::First) {
        return Some(year);
    }
    if let Some(year) = century_wildcard(text, End::First) {
        return Some(year);
    }
    if let Some(caps) = CENTURY_SPAN_WORDS.captures(text) {
        return group_int(&caps, "first").map(first_year_of_century);
    }
    century_words(text, End::First)
}

/// Last year of a `yyuu` or word-form century
pub fn century_last(text: &str) -> Option<i32> {
    century_wildcard(text, End::Last).or_else(|| century_words(text, End::Last))
}

// ── Early numerals ─────────────────────────────────────────────────

/// Short numerals such as Roman-era coin dates: `5`, `945`, `-18`
pub fn early_numeric(text: &str) -> Option<i32> {
    if EARLY_NUMERIC.is_match(text) || EARLY_NEGATIVE_FOUR_DIGIT.is_match(text) {
        leading_int(text)
    } else {
        None
    }
}

/// Last year of an early numeral range, or the single early numeral
pub fn early_numeric_last(text: &str) -> Option<i32> {
    match EARLY_NUMERIC_SPAN.captures(text) {
        Some(caps) => group_int(&caps, "last"),
        None => early_numeric(text),
    }
}

// ── Bracket normalization ──────────────────────────────────────────

/// Drops every bracket when one sits between two digits (`169[5]`, `[18]91`)
pub fn strip_brackets(text: &str) -> Option<String> {
    BRACKET_BETWEEN_DIGITS
        .is_match(text)
        .then(|| text.chars().filter(|c| !BRACKETS.contains(c)).collect())
}
