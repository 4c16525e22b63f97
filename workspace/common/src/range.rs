use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A calendar date range with day granularity.
///
/// Validity (`start < end`) is enforced at request time, not at
/// construction: the range is carried as the user picked it and the
/// forecast handler decides what to do with an inverted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    /// First forecasted day
    pub start: NaiveDate,
    /// Last forecasted day (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the range can be forecasted over: the end date must be
    /// strictly later than the start date.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Number of whole days to forecast, end date inclusive.
    ///
    /// Returns `None` for an invalid range; otherwise at least 2, since a
    /// valid range spans at least one full day plus the inclusive end.
    pub fn horizon(&self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        Some((self.end - self.start).num_days() as usize + 1)
    }
}
