use std::{cmp::Ordering, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseError, RANGE_SEPARATOR, prelude::*};

/// Inclusive, ascending span of years.
/// B.C. years are negative, so `-599/-500` runs from 599 B.C. to 500 B.C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{first}/{last}")]
pub struct YearRange {
    first: i32,
    last:  i32,
}

/// Error type for year range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The endpoints are out of order or beyond the future bound.
    #[error("unable to create year range from {first}, {last}")]
    InvalidRange { first: i32, last: i32 },

    /// A date string yielded endpoints that contradict each other.
    #[error("Unable to parse range from '{input}'")]
    Unparseable { input: String },

    /// An endpoint could not be read as a year.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid textual range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl YearRange {
    /// Creates a new range.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if first > last.
    pub fn new(first: i32, last: i32) -> Result<Self, RangeError> {
        if first > last {
            return Err(RangeError::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// A range holding one year
    pub const fn single(year: i32) -> Self {
        Self {
            first: year,
            last:  year,
        }
    }

    /// Earliest year of the range
    pub const fn first(&self) -> i32 {
        self.first
    }

    /// Latest year of the range
    pub const fn last(&self) -> i32 {
        self.last
    }

    /// Number of years covered, never zero
    pub const fn year_count(&self) -> u32 {
        self.last.abs_diff(self.first) + 1
    }

    /// Every year in the range, ascending
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }

    /// Every year in the range, materialized
    pub fn to_vec(&self) -> Vec<i32> {
        self.years().collect()
    }

    /// Checks if the range contains a given year
    pub const fn contains(&self, year: i32) -> bool {
        self.first <= year && year <= self.last
    }

    /// Checks if this range shares at least one year with another range
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.first <= other.last && other.first <= self.last
    }

    /// Checks if this range is completely contained within another range
    pub const fn is_within(&self, other: &Self) -> bool {
        other.first <= self.first && self.last <= other.last
    }
}

impl IntoIterator for YearRange {
    type Item = i32;
    type IntoIter = RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.years()
    }
}

fn parse_year(s: &str) -> Result<i32, RangeError> {
    s.trim()
        .parse()
        .map_err(|_| RangeError::InvalidFormat(format!("not a year: {s}")))
}

impl FromStr for YearRange {
    type Err = RangeError;

    /// Parses `first/last` or a single year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((first, last)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return parse_year(trimmed).map(Self::single);
        };
        if last.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators in '{trimmed}'"
            )));
        }
        Self::new(parse_year(first)?, parse_year(last)?)
    }
}

impl PartialOrd for YearRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first years, then last years
        match self.first.cmp(&other.first) {
            Ordering::Equal => self.last.cmp(&other.last),
            ord => ord,
        }
    }
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
