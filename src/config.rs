use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FUTURE_SLACK, DEFAULT_LOWER_BOUND};

/// Bounds a resolved year has to fall within.
///
/// The lower bound is fixed; the upper bound moves with the clock and is
/// `current_year + future_slack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Single years must be strictly greater than this
    pub lower_exclusive: i32,
    /// How far past the current year the upper bound sits
    pub future_slack: i32,
}

impl Bounds {
    /// Upper bound for the given current year.
    /// Exclusive for single years, inclusive for range endpoints.
    pub const fn upper(&self, current_year: i32) -> i32 {
        current_year.saturating_add(self.future_slack)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lower_exclusive: DEFAULT_LOWER_BOUND,
            future_slack: DEFAULT_FUTURE_SLACK,
        }
    }
}
