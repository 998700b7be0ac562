//! Ordered rule tables for the earliest/latest cascades.
//!
//! Order matters: range shapes come before the bare four-digit scan, and the
//! B.C. tables run before the common-era ones since their marker trails
//! otherwise identical patterns.

use crate::clock::Clock;
use crate::extract::{self, End};
use crate::types::leading_int;
use crate::YearParser;

/// One entry of a cascade table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `ca. 9th–8th century B.C.`
    CenturySpanBc(End),
    /// `between 300 and 150 B.C.`
    BetweenBc(End),
    /// `5th century B.C.`, last year only (the first year goes through `CenturyFirst`)
    CenturyBcLast,
    /// `800 B.C.`
    YearBc,
    /// `1698/1715`, ISO-like intervals
    SlashInterval(End),
    /// `between 1694 and 1799`
    Between(End),
    /// `1496-1499`
    HyphenFourDigit(End),
    /// `1757-58`
    HyphenTwoDigit,
    /// `1965-8`
    HyphenOneDigit,
    /// `17--?-18--?`
    CenturyMarkerSpan,
    /// `1598 or 1599`
    OrYear,
    /// `-1500 - -1400`
    NegativeAfterHyphen,
    /// `-1500`
    LeadingNegative,
    /// `1950s`
    DecadeApostrophe,
    /// First run of four digits
    FirstFourDigits,
    /// `1/2/79`, `5-1-59`
    MonthDayShortYear,
    /// `199u`, `186?`
    DecadeWildcard(End),
    /// `17th or 18th century`, last year
    CenturySpanLast,
    /// Any century form, first year
    CenturyFirst,
    /// `17uu`, `18th century`, last year
    CenturyLast,
    /// `-18`, `945`
    EarlyNumeric,
    /// `150 to 300`, or a single early numeral
    EarlyNumericLast,
}

pub const EARLIEST_BC: [Rule; 3] = [
    Rule::CenturySpanBc(End::First),
    Rule::BetweenBc(End::First),
    Rule::YearBc,
];

pub const LATEST_BC: [Rule; 4] = [
    Rule::CenturySpanBc(End::Last),
    Rule::BetweenBc(End::Last),
    Rule::CenturyBcLast,
    Rule::YearBc,
];

pub const EARLIEST: [Rule; 9] = [
    Rule::SlashInterval(End::First),
    Rule::Between(End::First),
    Rule::HyphenFourDigit(End::First),
    Rule::LeadingNegative,
    Rule::FirstFourDigits,
    Rule::MonthDayShortYear,
    Rule::DecadeWildcard(End::First),
    Rule::CenturyFirst,
    Rule::EarlyNumeric,
];

pub const LATEST: [Rule; 16] = [
    Rule::SlashInterval(End::Last),
    Rule::Between(End::Last),
    Rule::HyphenFourDigit(End::Last),
    Rule::HyphenTwoDigit,
    Rule::HyphenOneDigit,
    Rule::CenturyMarkerSpan,
    Rule::OrYear,
    Rule::NegativeAfterHyphen,
    Rule::LeadingNegative,
    Rule::DecadeApostrophe,
    Rule::FirstFourDigits,
    Rule::MonthDayShortYear,
    Rule::DecadeWildcard(End::Last),
    Rule::CenturySpanLast,
    Rule::CenturyLast,
    Rule::EarlyNumericLast,
];

impl<C: Clock> YearParser<C> {
    /// Candidate year produced by `rule`, before the cascade's bounds check
    pub(crate) fn apply(&self, rule: Rule, text: &str, depth: u8) -> Option<i32> {
        match rule {
            Rule::CenturySpanBc(end) => extract::century_span_bc(text, end),
            Rule::BetweenBc(end) => extract::between_bc(text, end),
            Rule::CenturyBcLast => extract::century_word_bc(text, End::Last),
            Rule::YearBc => extract::year_bc(text),
            Rule::SlashInterval(end) => extract::slash_interval(text, end),
            Rule::Between(end) => extract::between(text, end),
            Rule::HyphenFourDigit(End::First) => extract::hyphen_four_digit_first(text),
            Rule::HyphenFourDigit(End::Last) => {
                let tail = extract::hyphen_four_digit_tail(text)?;
                let year = leading_int(tail)?;
                if self.is_valid_year(year) {
                    // `1980s - 1990s` ends in 1999, not 1990
                    self.resolve_latest(tail, depth).year()
                } else {
                    // surfaced so the pair check can flag the range
                    Some(year)
                }
            }
            Rule::HyphenTwoDigit => self.completed_tail(extract::hyphen_two_digit(text)?),
            Rule::HyphenOneDigit => self.completed_tail(extract::hyphen_one_digit(text)?),
            Rule::CenturyMarkerSpan => extract::century_marker_span_last(text),
            Rule::OrYear => {
                let tail = extract::or_tail(text)?;
                self.resolve_latest(tail, depth).year()
            }
            Rule::NegativeAfterHyphen => extract::negative_year_after_hyphen(text),
            Rule::LeadingNegative => extract::leading_negative_year(text),
            Rule::DecadeApostrophe => extract::decade_apostrophe_last(text),
            Rule::FirstFourDigits => extract::first_four_digits(text).and_then(leading_int),
            Rule::MonthDayShortYear => extract::month_day_short_year(text, self.clock.today()),
            Rule::DecadeWildcard(end) => extract::decade_wildcard(text, end),
            Rule::CenturySpanLast => extract::century_span_last(text),
            Rule::CenturyFirst => extract::century_first(text),
            Rule::CenturyLast => extract::century_last(text),
            Rule::EarlyNumeric => extract::early_numeric(text),
            Rule::EarlyNumericLast => extract::early_numeric_last(text),
        }
    }

    /// The completed tail of `yyyy-yy` / `yyyy-y`, only if it forms a valid range
    fn completed_tail(&self, (first, last): (i32, i32)) -> Option<i32> {
        self.is_valid_range(first, last).then_some(last)
    }
}
