use thiserror::Error;

use crate::providers::ProviderError;

/// The unified error type for the `market_dashboard` crate.
///
/// Every failure a dashboard action can surface falls into one of these
/// kinds; none of them is fatal to the hosting process.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter was rejected (bad moving-average window,
    /// malformed date range, too many keywords).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The upstream data provider failed as a whole (network error, API
    /// rejection). Partial per-symbol absence is never reported this way.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// A comparison or fetch action was requested with no symbols at all.
    #[error("No symbols supplied")]
    EmptySelection,

    /// A well-formed request came back with zero rows.
    #[error("No data returned for request")]
    NoData,

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error originating from a render sink (e.g., file write).
    #[error("Sink error: {0}")]
    Sink(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        Error::ProviderUnavailable(err.to_string())
    }
}
