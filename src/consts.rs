/// Default exclusive lower bound for a single resolved year
pub const DEFAULT_LOWER_BOUND: i32 = -10_000;

/// Years past the current year that still count as valid.
/// Single years must be strictly below `current_year + FUTURE_SLACK`,
/// range endpoints may equal it.
pub const DEFAULT_FUTURE_SLACK: i32 = 2;

/// Placeholder some collections use for "no date recorded"
pub const UNKNOWN_DATE: &str = "0000-00-00";

/// Characters standing in for the unknown last digit of a decade (`186?`, `195x`)
pub const DECADE_WILDCARDS: [char; 4] = ['u', '-', '?', 'x'];

/// Editorial brackets stripped before the retry pass (`169[5]`, `[18]91`)
pub const BRACKETS: [char; 2] = ['[', ']'];

/// Years in a century
pub(crate) const CENTURY_SPAN: i32 = 100;
/// Offset of the last year within a century or decade span
pub(crate) const LAST_IN_CENTURY: i32 = 99;

/// Century assumed first for two-digit years in `m/d/yy` dates
pub(crate) const SHORT_YEAR_CENTURY: i32 = 2000;

/// Range separator used by `YearRange`'s textual form
pub const RANGE_SEPARATOR: char = '/';
