//! Earliest and latest years from free-form catalog dates.
//!
//! Bibliographic and archival records carry dates such as `ca. 1790`, `17uu`,
//! `between 1694 and 1799` or `5th century B.C.`. [`YearParser`] reads each
//! string as an earliest and a latest year, validates the pair and expands it
//! into the inclusive [`YearRange`] between them.
//!
//! ```
//! use year_range::{FixedClock, YearParser};
//!
//! let parser = YearParser::new(FixedClock::from_ymd(2020, 6, 15).unwrap());
//! assert_eq!(parser.earliest_year("ca. 1790"), Some(1790));
//! assert_eq!(parser.latest_year("17uu"), Some(1799));
//! assert_eq!(parser.earliest_year("5th century B.C."), Some(-599));
//! ```

mod clock;
mod config;
mod consts;
mod extract;
mod patterns;
mod prelude;
mod range;
mod rules;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Bounds;
pub use consts::*;
pub use extract::End;
pub use range::{RangeError, YearRange};
pub use rules::Rule;
pub use types::YearInput;

use crate::prelude::*;
use tracing::{debug, trace};
use types::Resolution;

/// Brackets are stripped at most once per resolution
const MAX_BRACKET_RETRIES: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Not a year numeral: '{_0}'")]
    NotANumeral(String),
}

impl std::error::Error for ParseError {}

/// Resolves date strings to years against a clock and fixed bounds.
#[derive(Debug, Clone, Default)]
pub struct YearParser<C = SystemClock> {
    clock: C,
    bounds: Bounds,
}

impl<C: Clock> YearParser<C> {
    /// Parser with the default bounds
    pub fn new(clock: C) -> Self {
        Self::with_bounds(clock, Bounds::default())
    }

    pub const fn with_bounds(clock: C, bounds: Bounds) -> Self {
        Self { clock, bounds }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Upper bound derived from the clock: exclusive for single years,
    /// inclusive for range endpoints
    fn upper_bound(&self) -> i32 {
        self.bounds.upper(self.clock.current_year())
    }

    /// Earliest year the text can stand for, e.g. 1700 for `17uu`.
    ///
    /// Two-digit years in `m/d/yy` dates are read in the 2000s unless that
    /// lands after today: `1/1/17` gives 2017, `1/1/27` gives 1927 (in 2020).
    pub fn earliest_year<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<i32> {
        let text = text.into()?;
        self.resolve_earliest(text, 0).year()
    }

    /// Latest year the text can stand for, e.g. 1799 for `17uu`
    pub fn latest_year<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<i32> {
        let text = text.into()?;
        self.resolve_latest(text, 0).year()
    }

    /// True if `lower_exclusive < year < current_year + future_slack`
    pub fn is_valid_year(&self, year: i32) -> bool {
        self.bounds.lower_exclusive < year && year < self.upper_bound()
    }

    /// True if neither year is past `current_year + future_slack` and
    /// `first <= last`. No lower bound applies to ranges.
    pub fn is_valid_range(&self, first: i32, last: i32) -> bool {
        let upper = self.upper_bound();
        first <= upper && last <= upper && first <= last
    }

    /// All years from the earliest to the latest year of `text`.
    ///
    /// Returns `Ok(None)` when nothing year-like is found, and a single-year
    /// range when only one end resolves.
    ///
    /// # Errors
    /// Returns `RangeError::Unparseable` when both ends were read but do not
    /// form a valid range (`1975 - 1905`), or one end was read and the other
    /// fell outside the bounds.
    pub fn parse_range<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
    ) -> Result<Option<YearRange>, RangeError> {
        let Some(text) = text.into() else {
            return Ok(None);
        };
        let earliest = self.resolve_earliest(text, 0);
        let latest = self.resolve_latest(text, 0);

        match (earliest, latest) {
            (Resolution::Found(first), Resolution::Found(last)) if self.is_valid_range(first, last) => {
                YearRange::new(first, last).map(Some)
            }
            (Resolution::Found(_), Resolution::Found(_) | Resolution::OutOfBounds(_))
            | (Resolution::OutOfBounds(_), Resolution::Found(_)) => {
                debug!(input = text, ?earliest, ?latest, "contradictory year range");
                Err(RangeError::Unparseable {
                    input: text.to_owned(),
                })
            }
            (Resolution::Found(year), Resolution::Absent)
            | (Resolution::Absent, Resolution::Found(year)) => Ok(Some(YearRange::single(year))),
            _ => Ok(None),
        }
    }

    /// All years from `first` to `last` for values the caller already holds.
    ///
    /// Text inputs must be plain numerals. A missing side yields the other
    /// year alone; both missing yields an empty list. Unlike
    /// [`Self::is_valid_range`], the first year must also lie above
    /// `Bounds::lower_exclusive`, which caps the size of the list.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` for non-numeral text and
    /// `RangeError::InvalidRange` when the pair is not a valid range or
    /// starts at or below the lower bound.
    pub fn materialize_range(
        &self,
        first: Option<YearInput>,
        last: Option<YearInput>,
    ) -> Result<Vec<i32>, RangeError> {
        let first = first.as_ref().map(YearInput::to_year).transpose()?;
        let last = last.as_ref().map(YearInput::to_year).transpose()?;

        match (first, last) {
            (None, None) => Ok(Vec::new()),
            (Some(year), None) | (None, Some(year)) => Ok(vec![year]),
            (Some(first), Some(last))
                if first > self.bounds.lower_exclusive && self.is_valid_range(first, last) =>
            {
                Ok((first..=last).collect())
            }
            (Some(first), Some(last)) => Err(RangeError::InvalidRange { first, last }),
        }
    }

    pub(crate) fn resolve_earliest(&self, text: &str, depth: u8) -> Resolution {
        self.resolve(text, End::First, depth)
    }

    pub(crate) fn resolve_latest(&self, text: &str, depth: u8) -> Resolution {
        self.resolve(text, End::Last, depth)
    }

    /// Runs one cascade.
    ///
    /// B.C. rules win outright. Common-era candidates must pass
    /// [`Self::is_valid_year`]; the earliest cascade skips rejected candidates,
    /// while in the latest cascade the first candidate is final. If nothing is
    /// found, brackets between digits are stripped and the cascade runs again.
    fn resolve(&self, text: &str, end: End, depth: u8) -> Resolution {
        if text.is_empty() || text == UNKNOWN_DATE {
            return Resolution::Absent;
        }

        let (bc_table, table): (&[Rule], &[Rule]) = match end {
            End::First => (&rules::EARLIEST_BC, &rules::EARLIEST),
            End::Last => (&rules::LATEST_BC, &rules::LATEST),
        };

        for &rule in bc_table {
            if let Some(year) = self.apply(rule, text, depth) {
                trace!(input = text, ?rule, year, "B.C. rule matched");
                return Resolution::Found(year);
            }
        }

        let mut resolution = Resolution::Absent;
        for &rule in table {
            let Some(year) = self.apply(rule, text, depth) else {
                continue;
            };
            if self.is_valid_year(year) {
                trace!(input = text, ?rule, year, "rule matched");
                return Resolution::Found(year);
            }
            debug!(input = text, ?rule, year, "candidate year out of bounds");
            resolution = resolution.or(Resolution::OutOfBounds(year));
            if end == End::Last {
                break;
            }
        }

        if depth < MAX_BRACKET_RETRIES {
            if let Some(stripped) = extract::strip_brackets(text) {
                debug!(input = text, retry = %stripped, "retrying without brackets");
                return match self.resolve(&stripped, end, depth + 1) {
                    found @ Resolution::Found(_) => found,
                    retry => resolution.or(retry),
                };
            }
        }
        resolution
    }
}

/// Earliest year using the system clock; see [`YearParser::earliest_year`]
pub fn earliest_year<'a>(text: impl Into<Option<&'a str>>) -> Option<i32> {
    YearParser::<SystemClock>::default().earliest_year(text)
}

/// Latest year using the system clock; see [`YearParser::latest_year`]
pub fn latest_year<'a>(text: impl Into<Option<&'a str>>) -> Option<i32> {
    YearParser::<SystemClock>::default().latest_year(text)
}

/// Year range using the system clock; see [`YearParser::parse_range`]
///
/// # Errors
/// See [`YearParser::parse_range`].
pub fn parse_range<'a>(text: impl Into<Option<&'a str>>) -> Result<Option<YearRange>, RangeError> {
    YearParser::<SystemClock>::default().parse_range(text)
}
