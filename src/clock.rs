//! Source of "today" for the validity bounds and two-digit year inference.

use chrono::{Datelike, Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock {
    /// Today's date
    fn today(&self) -> NaiveDate;

    /// Today's calendar year
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Fixed clock for the given calendar date, `None` if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
