//! Core of a financial-data dashboard: market-data fetching, multi-symbol
//! comparison frames, chart-spec assembly, listing-page tables, and
//! search-interest trends.
//!
//! The central piece is the comparison pipeline: normalize the user's
//! symbols ([`models::symbol::Symbol::normalize`]), issue one batched history
//! fetch through a [`providers::DataProvider`], reshape the result into a
//! [`models::frame::ComparisonFrame`], and derive [`charts::ChartSpec`]s from
//! it. Everything is created per request and discarded; there is no caching
//! and no shared state beyond the provider's own rate limiter.

pub mod charts;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod fundamentals;
pub mod io;
pub mod listings;
pub mod models;
pub mod providers;
pub mod requests;
pub mod trends;
