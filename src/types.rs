use crate::{ParseError, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("numeral pattern must compile"));

/// A year handed to [`crate::YearParser::materialize_range`]: either an integer
/// or text that should hold one (`"1865"`, `"-44"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Int(i32),
    Text(String),
}

impl YearInput {
    /// Coerces the input to a year.
    ///
    /// # Errors
    /// Returns `ParseError::NotANumeral` if the text is not an optionally signed
    /// run of digits, or does not fit a year.
    pub fn to_year(&self) -> Result<i32, ParseError> {
        match self {
            Self::Int(year) => Ok(*year),
            Self::Text(text) if NUMERAL.is_match(text) => text
                .parse()
                .map_err(|_| ParseError::NotANumeral(text.clone())),
            Self::Text(text) => Err(ParseError::NotANumeral(text.clone())),
        }
    }
}

impl From<&str> for YearInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl fmt::Display for YearInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(year) => write!(f, "{year}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Outcome of resolving one side (earliest or latest) of a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// A year that passed validation
    Found(i32),
    /// A candidate was read but fell outside the bounds
    OutOfBounds(i32),
    /// Nothing year-like in the text
    Absent,
}

impl Resolution {
    pub(crate) const fn year(self) -> Option<i32> {
        match self {
            Self::Found(year) => Some(year),
            Self::OutOfBounds(_) | Self::Absent => None,
        }
    }

    /// Keeps `self` unless it found nothing at all
    pub(crate) const fn or(self, other: Self) -> Self {
        match self {
            Self::Absent => other,
            found => found,
        }
    }
}

/// Leading integer: optional whitespace, optional sign, digits.
/// Trailing text is ignored (`"1990s"` reads as 1990); no digits reads as `None`.
pub(crate) fn leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i32>().ok().map(|value| sign * value)
}
