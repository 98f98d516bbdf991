//! Validated date ranges for history requests.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// An inclusive start / exclusive end date range.
///
/// The range is inclusive as the user sees it (`start <= end` is enforced at
/// construction), and **end-exclusive at the fetch boundary**: the provider
/// request window is `[start 00:00 UTC, end 00:00 UTC)`, so bars on the end
/// date itself are not returned. This matches Yahoo's `period2` behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange, Error> {
        if start > end {
            return Err(Error::InvalidParameter(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start of the provider request window (inclusive), as a UTC instant.
    pub fn period_start(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// End of the provider request window (exclusive), as a UTC instant.
    pub fn period_end(&self) -> DateTime<Utc> {
        self.end.and_time(NaiveTime::MIN).and_utc()
    }

    /// Whether a bar date falls inside the fetch window `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
