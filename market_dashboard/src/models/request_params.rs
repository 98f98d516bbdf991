use serde::{Deserialize, Serialize};

use crate::models::{
    asset::AssetClass, date_range::DateRange, interval::Interval, symbol::Symbol,
};

/// Universal parameters for requesting bar history from a market data
/// provider.
///
/// One request covers the whole symbol set: batching is intentional, it keeps
/// request volume down against a rate-limited upstream. How a provider maps
/// the set onto its wire protocol is its own business.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Symbols to request, already normalized. Order is preserved into the
    /// result.
    pub symbols: Vec<Symbol>,

    /// The requested window. Start is inclusive, end is exclusive at the
    /// provider boundary; see [`DateRange`].
    pub range: DateRange,

    /// The asset class of the requested symbols. Drives post-fetch column
    /// handling (currency pairs lose volume).
    pub asset_class: AssetClass,

    /// Bar interval; daily unless the caller says otherwise.
    pub interval: Interval,
}

impl HistoryRequest {
    pub fn new(symbols: Vec<Symbol>, range: DateRange, asset_class: AssetClass) -> Self {
        Self {
            symbols,
            range,
            asset_class,
            interval: Interval::default(),
        }
    }
}
