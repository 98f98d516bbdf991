//! The aligned, per-symbol collection of series that drives multi-symbol
//! charts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{bar_series::BarSeries, symbol::Symbol};

/// A mapping from symbol to its fetched series.
///
/// Iteration order is the insertion order of the batch result, which is not
/// necessarily the order the user typed the symbols in; downstream charts
/// deliberately inherit that order. Symbols the provider returned nothing
/// for are simply absent. Dates are exactly those the provider returned per
/// symbol; gaps are left missing, never filled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFrame {
    series: IndexMap<String, BarSeries>,
}

impl ComparisonFrame {
    /// Reshapes a raw batch result into a frame.
    ///
    /// Keeps only series for requested symbols that actually came back with
    /// data, in the batch result's order. A symbol appearing twice in the
    /// batch keeps its first occurrence. Zero requested symbols (or an empty
    /// batch) yields an empty frame; the caller decides whether that means
    /// "nothing to render" or an error.
    pub fn from_batch(batch: Vec<BarSeries>, requested: &[Symbol]) -> ComparisonFrame {
        let mut series = IndexMap::new();
        for entry in batch {
            if entry.bars.is_empty() {
                continue;
            }
            if !requested.contains(&entry.symbol) {
                continue;
            }
            series
                .entry(entry.symbol.as_str().to_string())
                .or_insert(entry);
        }
        ComparisonFrame { series }
    }

    /// The series for one symbol, if the batch returned it.
    pub fn get(&self, symbol: &str) -> Option<&BarSeries> {
        self.series.get(symbol)
    }

    /// Per-symbol series in frame order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BarSeries)> {
        self.series.iter().map(|(symbol, series)| (symbol.as_str(), series))
    }

    /// Symbols present in the frame, in frame order.
    pub fn symbols(&self) -> Vec<&str> {
        self.series.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{asset::AssetClass, bar::Bar, interval::Interval};

    fn series(symbol: &str, days: u32) -> BarSeries {
        let bars = (1..=days)
            .map(|d| Bar {
                date: NaiveDate::from_ymd_opt(2023, 1, d).unwrap(),
                open: 10.0,
                high: 11.0,
                low: 9.0,
                close: 10.5,
                volume: Some(1_000.0),
            })
            .collect();
        BarSeries {
            symbol: Symbol::normalize(symbol, AssetClass::Equity),
            interval: Interval::Day,
            bars,
        }
    }

    fn requested(symbols: &[&str]) -> Vec<Symbol> {
        symbols
            .iter()
            .map(|s| Symbol::normalize(s, AssetClass::Equity))
            .collect()
    }

    #[test]
    fn absent_symbols_are_silently_skipped() {
        // B was requested but the provider returned nothing for it.
        let batch = vec![series("A", 3), series("C", 3)];
        let frame = ComparisonFrame::from_batch(batch, &requested(&["A", "B", "C"]));
        assert_eq!(frame.symbols(), vec!["A", "C"]);
    }

    #[test]
    fn unrequested_symbols_are_dropped() {
        let batch = vec![series("A", 3), series("Z", 3)];
        let frame = ComparisonFrame::from_batch(batch, &requested(&["A"]));
        assert_eq!(frame.symbols(), vec!["A"]);
    }

    #[test]
    fn empty_series_do_not_enter_the_frame() {
        let batch = vec![series("A", 3), series("B", 0)];
        let frame = ComparisonFrame::from_batch(batch, &requested(&["A", "B"]));
        assert_eq!(frame.symbols(), vec!["A"]);
    }

    #[test]
    fn frame_order_follows_batch_order() {
        // Batch order wins over the user's input order.
        let batch = vec![series("MSFT", 3), series("AAPL", 3)];
        let frame = ComparisonFrame::from_batch(batch, &requested(&["AAPL", "MSFT"]));
        assert_eq!(frame.symbols(), vec!["MSFT", "AAPL"]);
    }

    #[test]
    fn duplicate_symbols_keep_first_occurrence() {
        let mut second = series("A", 5);
        second.bars.truncate(1);
        let batch = vec![series("A", 3), second];
        let frame = ComparisonFrame::from_batch(batch, &requested(&["A"]));
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.get("A").unwrap().bars.len(), 3);
    }

    #[test]
    fn zero_requested_symbols_yield_empty_frame() {
        let frame = ComparisonFrame::from_batch(vec![series("A", 3)], &[]);
        assert!(frame.is_empty());
    }

    #[test]
    fn from_batch_is_idempotent() {
        let batch = vec![series("B", 2), series("A", 4)];
        let wanted = requested(&["A", "B"]);
        let first = ComparisonFrame::from_batch(batch.clone(), &wanted);
        let second = ComparisonFrame::from_batch(batch, &wanted);
        assert_eq!(first, second);
        assert_eq!(first.symbols(), second.symbols());
    }
}
