//! Canonical in-memory representation of a daily OHLCV record.
//!
//! This struct is the standard output of every
//! [`DataProvider`](crate::providers::DataProvider) implementation,
//! regardless of asset class.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single price-and-volume record for one trading period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The trading date of this bar.
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the period.
    pub high: f64,

    /// Lowest price during the period.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the period. `None` where volume is not
    /// meaningful for the asset class (currency pairs) or the provider
    /// supplied no value for the date.
    pub volume: Option<f64>,
}
