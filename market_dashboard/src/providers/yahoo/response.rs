//! Wire schema for the Yahoo v8 chart endpoint.

use chrono::DateTime;
use serde::Deserialize;

use crate::models::{bar::Bar, bar_series::BarSeries, interval::Interval, symbol::Symbol};

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: ChartPayload,
}

#[derive(Deserialize, Debug)]
pub struct ChartPayload {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartApiError>,
}

/// Per-symbol API error (unknown ticker, delisted symbol, bad range).
/// These never abort a batch; the symbol is just skipped.
#[derive(Deserialize, Debug)]
pub struct ChartApiError {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

/// Parallel per-field arrays; Yahoo fills halted or missing periods with
/// nulls.
#[derive(Deserialize, Debug, Default)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Converts the parallel arrays into a [`BarSeries`].
    ///
    /// Rows where any OHLC field is null are provider gaps and are skipped;
    /// a duplicate or out-of-order timestamp is dropped so the series stays
    /// ascending with unique dates.
    pub fn into_series(self, symbol: Symbol, interval: Interval) -> BarSeries {
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        let mut bars: Vec<Bar> = Vec::with_capacity(self.timestamp.len());

        for (i, ts) in self.timestamp.iter().enumerate() {
            let Some(date) = DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
                continue;
            };
            let (Some(open), Some(high), Some(low), Some(close)) = (
                field(&quote.open, i),
                field(&quote.high, i),
                field(&quote.low, i),
                field(&quote.close, i),
            ) else {
                continue;
            };
            if bars.last().is_some_and(|last| last.date >= date) {
                continue;
            }
            bars.push(Bar {
                date,
                open,
                high,
                low,
                close,
                volume: field(&quote.volume, i),
            });
        }

        BarSeries {
            symbol,
            interval,
            bars,
        }
    }
}

fn field(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}
