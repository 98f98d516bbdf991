use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    fundamentals::{Language, StatementKind},
    listings::ListingKind,
    models::{asset::AssetClass, interval::Interval},
    trends::TrendLocale,
};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (dashboard.toml). Defaults are used when
    /// omitted.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write artifacts to timestamped JSON files under the temp directory
    /// instead of stdout.
    #[arg(long)]
    pub to_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one symbol's history and emit candlestick, trend, and volume
    /// chart specs
    History {
        /// Ticker to fetch (append the exchange suffix yourself, e.g. 2330.TW)
        #[arg(long)]
        symbol: String,

        /// Asset class of the symbol
        #[arg(long, value_enum, default_value = "equity")]
        class: AssetClass,

        /// Bar interval
        #[arg(long, value_enum, default_value = "day")]
        interval: Interval,

        /// Start date, inclusive (e.g. "2023-01-01")
        #[arg(long)]
        start: NaiveDate,

        /// End date, exclusive at the provider boundary (e.g. "2023-06-30")
        #[arg(short, long)]
        end: NaiveDate,

        /// Moving-average window, repeatable (periods over Close)
        #[arg(long = "window", default_values_t = vec![5, 10, 20])]
        windows: Vec<u32>,
    },

    /// Compare up to six symbols: one batched fetch, trend and volume
    /// comparison specs
    Compare {
        /// Comma-separated list of symbols (e.g. "AAPL,MSFT")
        #[arg(long)]
        symbols: String,

        /// Asset class of every symbol in the set
        #[arg(long, value_enum, default_value = "equity")]
        class: AssetClass,

        /// Bar interval
        #[arg(long, value_enum, default_value = "day")]
        interval: Interval,

        /// Start date, inclusive
        #[arg(long)]
        start: NaiveDate,

        /// End date, exclusive at the provider boundary
        #[arg(short, long)]
        end: NaiveDate,
    },

    /// Fetch a company's key indicators as a labeled table
    Fundamentals {
        /// Ticker of the company
        #[arg(long)]
        symbol: String,

        /// Language for row labels
        #[arg(long, value_enum, default_value = "chinese")]
        language: Language,
    },

    /// Fetch one financial statement (balance sheet, income, cash flow)
    Statement {
        /// Ticker of the company
        #[arg(long)]
        symbol: String,

        /// Which statement to fetch
        #[arg(long, value_enum)]
        kind: StatementKind,

        /// Language for row labels
        #[arg(long, value_enum, default_value = "chinese")]
        language: Language,
    },

    /// Fetch a listing page (most active, gainers, ...) as a table
    Listing {
        #[arg(long, value_enum)]
        kind: ListingKind,
    },

    /// Fetch search-interest trends for up to five keywords
    Trends {
        /// Comma-separated keywords
        #[arg(long)]
        keywords: String,

        /// Locale pair used for the request
        #[arg(long, value_enum, default_value = "taipei")]
        locale: TrendLocale,

        /// Start date, inclusive
        #[arg(long)]
        start: NaiveDate,

        /// End date of the trends window
        #[arg(short, long)]
        end: NaiveDate,
    },
}
