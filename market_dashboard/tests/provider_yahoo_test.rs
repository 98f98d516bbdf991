//! Live tests against the Yahoo Finance chart endpoint.
//!
//! Ignored by default; run with `cargo test -- --ignored` when network
//! access is available. Serialized so the rate limiter is the only thing
//! pacing the requests.

use chrono::NaiveDate;
use market_dashboard::{
    config::Config,
    fundamentals::{self, EnglishLabels},
    models::{
        asset::AssetClass, date_range::DateRange, interval::Interval,
        request_params::HistoryRequest, symbol::Symbol,
    },
    providers::{DataProvider, yahoo::YahooProvider},
};
use serial_test::serial;

fn range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
#[ignore]
#[serial]
async fn fetches_daily_bars_for_one_symbol() {
    let provider = YahooProvider::new(&Config::default()).unwrap();

    let request = HistoryRequest::new(
        vec![Symbol::normalize("AAPL", AssetClass::Equity)],
        range(),
        AssetClass::Equity,
    );
    let batch = provider.fetch_bars(request).await.unwrap();

    assert_eq!(batch.len(), 1);
    let series = &batch[0];
    assert_eq!(series.symbol.as_str(), "AAPL");
    assert!(!series.bars.is_empty());
    for bar in &series.bars {
        assert!(range().contains(bar.date));
        assert!(bar.low <= bar.high);
        assert!(bar.volume.is_some());
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn batched_request_returns_one_series_per_symbol() {
    let provider = YahooProvider::new(&Config::default()).unwrap();

    let symbols = vec![
        Symbol::normalize("AAPL", AssetClass::Equity),
        Symbol::normalize("MSFT", AssetClass::Equity),
    ];
    let request = HistoryRequest::new(symbols, range(), AssetClass::Equity);
    let batch = provider.fetch_bars(request).await.unwrap();

    assert_eq!(batch.len(), 2);
    let names: Vec<&str> = batch.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(names, vec!["AAPL", "MSFT"]);
}

#[tokio::test]
#[ignore]
#[serial]
async fn unknown_symbol_is_skipped_without_failing_the_batch() {
    let provider = YahooProvider::new(&Config::default()).unwrap();

    let symbols = vec![
        Symbol::normalize("AAPL", AssetClass::Equity),
        Symbol::normalize("THISISNOTATICKER123", AssetClass::Equity),
    ];
    let request = HistoryRequest::new(symbols, range(), AssetClass::Equity);
    let batch = provider.fetch_bars(request).await.unwrap();

    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].symbol.as_str(), "AAPL");
}

#[tokio::test]
#[ignore]
#[serial]
async fn fetches_company_fundamentals() {
    let config = Config::default();
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .unwrap();

    let symbol = Symbol::normalize("AAPL", AssetClass::Equity);
    let table = fundamentals::fetch_fundamentals(&client, &symbol, &EnglishLabels)
        .await
        .unwrap();

    let name = table
        .rows
        .iter()
        .find(|row| row.label == "Company Name")
        .unwrap();
    assert!(name.value.contains("Apple"));
}

#[tokio::test]
#[ignore]
#[serial]
async fn weekly_interval_returns_fewer_bars() {
    let provider = YahooProvider::new(&Config::default()).unwrap();

    let mut request = HistoryRequest::new(
        vec![Symbol::normalize("AAPL", AssetClass::Equity)],
        range(),
        AssetClass::Equity,
    );
    request.interval = Interval::Week;
    let batch = provider.fetch_bars(request).await.unwrap();

    assert_eq!(batch.len(), 1);
    // Around 20 trading days vs around 5 weeks in January.
    assert!(batch[0].bars.len() < 10);
}
