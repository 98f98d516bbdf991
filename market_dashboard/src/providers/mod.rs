//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, a unified interface for
//! fetching bar history from any market data vendor. Each concrete provider
//! (currently Yahoo Finance) implements it to handle vendor-specific wire
//! logic.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_dashboard::models::{bar_series::BarSeries, request_params::HistoryRequest};
//! use market_dashboard::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_bars(
//!         &self,
//!         _params: HistoryRequest,
//!     ) -> Result<Vec<BarSeries>, ProviderError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod yahoo;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar_series::BarSeries, request_params::HistoryRequest};

/// Trait for fetching bar history from a market data provider.
///
/// One call covers the whole symbol set of the request. Symbols the vendor
/// has no data for are skipped, never an error; only a failure of the call
/// as a whole is.
#[async_trait]
pub trait DataProvider {
    /// Fetches bar history for the given request parameters.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<BarSeries>)` - One series per symbol the vendor returned
    ///   data for, in the vendor's result order.
    /// * `Err(ProviderError)` - If the request fails as a whole.
    async fn fetch_bars(&self, params: HistoryRequest) -> Result<Vec<BarSeries>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured user agent contains invalid header characters.
    #[snafu(display("Invalid user agent: {source}"))]
    InvalidUserAgent {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },

    /// The configured request rate is zero.
    #[snafu(display("Rate limit must be at least one request per second"))]
    InvalidRateLimit { backtrace: Backtrace },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API rejected the request as a whole.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// An internal error occurred while processing data within the provider.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{asset::AssetClass, date_range::DateRange, symbol::Symbol};

    struct YahooLike;
    struct StubProvider;

    #[async_trait]
    impl DataProvider for YahooLike {
        async fn fetch_bars(&self, _params: HistoryRequest) -> Result<Vec<BarSeries>, ProviderError> {
            Ok(vec![])
        }
    }

    #[async_trait]
    impl DataProvider for StubProvider {
        async fn fetch_bars(&self, _params: HistoryRequest) -> Result<Vec<BarSeries>, ProviderError> {
            Ok(vec![])
        }
    }

    // Runtime provider selection only works through `Box<dyn DataProvider>`.
    fn get_provider(name: &str) -> Box<dyn DataProvider> {
        if name == "yahoo" {
            Box::new(YahooLike)
        } else {
            Box::new(StubProvider)
        }
    }

    #[tokio::test]
    async fn dynamic_provider_dispatch() {
        let provider = get_provider("stub");

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
        )
        .unwrap();
        let params = HistoryRequest::new(
            vec![Symbol::normalize("AAPL", AssetClass::Equity)],
            range,
            AssetClass::Equity,
        );

        let result = provider.fetch_bars(params).await;
        assert!(result.is_ok());
    }
}
