//! History-fetching facade for the dashboard's actions.
//!
//! Every user action goes through [`MarketData`]: a single-symbol history
//! fetch or a batched comparison fetch. Both are one provider call; the
//! difference is the shape of what comes back.

mod batch_request;
pub use batch_request::fetch_comparison_frame;

mod single_request;
pub use single_request::fetch_single_series;

use crate::{
    config::Config,
    errors::Error,
    models::{
        asset::AssetClass, bar_series::BarSeries, date_range::DateRange,
        frame::ComparisonFrame, interval::Interval, symbol::Symbol,
    },
    providers::{DataProvider, yahoo::YahooProvider},
};

/// Entry point for history fetches, generic over the provider behind it.
pub struct MarketData {
    provider: Box<dyn DataProvider + Send + Sync>,
}

impl MarketData {
    /// Wraps an arbitrary provider. Used directly by tests and by hosts
    /// that bring their own data source.
    pub fn with_provider(provider: Box<dyn DataProvider + Send + Sync>) -> Self {
        Self { provider }
    }

    /// The default dashboard setup: Yahoo Finance behind a rate limiter.
    pub fn yahoo(config: &Config) -> Result<Self, Error> {
        let provider = YahooProvider::new(config).map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self::with_provider(Box::new(provider)))
    }

    /// Fetches the history of one symbol over `range`.
    pub async fn fetch_single(
        &self,
        symbol: &Symbol,
        range: DateRange,
        asset_class: AssetClass,
        interval: Interval,
    ) -> Result<BarSeries, Error> {
        fetch_single_series(self.provider.as_ref(), symbol, range, asset_class, interval).await
    }

    /// Fetches aligned histories for a symbol set in one provider call and
    /// reshapes them into a [`ComparisonFrame`].
    pub async fn fetch_comparison(
        &self,
        symbols: &[Symbol],
        range: DateRange,
        asset_class: AssetClass,
        interval: Interval,
    ) -> Result<ComparisonFrame, Error> {
        fetch_comparison_frame(self.provider.as_ref(), symbols, range, asset_class, interval)
            .await
    }
}

/// Drops fields that are not meaningful for the asset class, right after
/// fetch and before anything downstream sees the data.
fn drop_unrequested_fields(batch: Vec<BarSeries>, asset_class: AssetClass) -> Vec<BarSeries> {
    if asset_class.has_volume() {
        return batch;
    }
    batch
        .into_iter()
        .map(BarSeries::without_volume)
        .collect()
}
