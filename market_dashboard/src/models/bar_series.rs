//! A collection of bars for a single symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{bar::Bar, interval::Interval, symbol::Symbol};

/// The complete history returned for one symbol, ordered by date ascending
/// with unique dates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// The symbol this data represents (e.g. `AAPL`, `TWDGBP=X`).
    pub symbol: Symbol,
    /// The time interval of each bar in the series.
    pub interval: Interval,
    /// The OHLCV records, exactly as the provider returned them.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Dates of every bar, in series order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|bar| bar.date).collect()
    }

    /// Closing prices, in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// Whether any bar in the series carries a volume value.
    pub fn has_volume(&self) -> bool {
        self.bars.iter().any(|bar| bar.volume.is_some())
    }

    /// Drops the volume column from every bar. Used for asset classes where
    /// volume has no meaning, right after fetch.
    pub fn without_volume(mut self) -> BarSeries {
        for bar in &mut self.bars {
            bar.volume = None;
        }
        self
    }
}
