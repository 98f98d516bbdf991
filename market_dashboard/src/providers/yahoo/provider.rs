use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use indexmap::IndexMap;
use reqwest::{Client, header};
use snafu::{OptionExt, ResultExt};
use std::num::NonZeroU32;

use crate::{
    config::Config,
    models::{bar_series::BarSeries, request_params::HistoryRequest, symbol::Symbol},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InternalSnafu, InvalidRateLimitSnafu,
        InvalidUserAgentSnafu, ProviderError, ProviderInitError, ReqwestSnafu,
        yahoo::{params::construct_query, response::ChartEnvelope},
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Market data provider backed by Yahoo's unauthenticated v8 chart API.
///
/// Yahoo enforces undocumented rate limits, so every outgoing request waits
/// on a process-local limiter. There is no retry: a transport failure fails
/// the whole call.
pub struct YahooProvider {
    client: Client,
    limiter: DefaultDirectRateLimiter,
}

impl YahooProvider {
    /// Creates a new Yahoo provider from the dashboard configuration.
    ///
    /// The configured user agent is sent with every request; Yahoo rejects
    /// the reqwest default.
    pub fn new(config: &Config) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent).context(InvalidUserAgentSnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        let per_second = NonZeroU32::new(config.requests_per_second)
            .context(InvalidRateLimitSnafu)?;
        let limiter = RateLimiter::direct(Quota::per_second(per_second));

        Ok(Self { client, limiter })
    }

    /// Fetches one symbol's chart, or `None` when Yahoo has no data for it.
    async fn fetch_symbol(
        &self,
        symbol: &Symbol,
        params: &HistoryRequest,
    ) -> Result<Option<BarSeries>, ProviderError> {
        self.limiter.until_ready().await;

        let url = format!("{BASE_URL}/{symbol}");
        let response = self
            .client
            .get(&url)
            .query(&construct_query(params))
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(ReqwestSnafu)?;

        let envelope: ChartEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return ApiSnafu {
                    message: format!("{url} returned {status}"),
                }
                .fail();
            }
            Err(e) => {
                return InternalSnafu {
                    message: format!("malformed chart response for {symbol}: {e}"),
                }
                .fail();
            }
        };

        // Unknown or delisted tickers come back as a per-symbol API error;
        // the rest of the batch proceeds without them.
        if let Some(error) = envelope.chart.error {
            log::warn!(
                "[{symbol}] provider returned no data ({}); skipping",
                error.code
            );
            return Ok(None);
        }

        let Some(result) = envelope
            .chart
            .result
            .and_then(|results| results.into_iter().next())
        else {
            log::warn!("[{symbol}] chart response carried no result; skipping");
            return Ok(None);
        };

        Ok(Some(result.into_series(symbol.clone(), params.interval)))
    }
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_bars(&self, params: HistoryRequest) -> Result<Vec<BarSeries>, ProviderError> {
        let mut all_series: IndexMap<String, BarSeries> = IndexMap::new();

        for symbol in &params.symbols {
            if symbol.is_empty() || all_series.contains_key(symbol.as_str()) {
                continue;
            }
            if let Some(series) = self.fetch_symbol(symbol, &params).await? {
                all_series.insert(symbol.as_str().to_string(), series);
            }
        }

        Ok(all_series.into_values().collect())
    }
}
