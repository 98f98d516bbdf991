//! Chart specifications derived from fetched data.
//!
//! A [`ChartSpec`] is pure data: named traces plus title and axis labels,
//! serialized as JSON for whatever surface actually draws it. It has no
//! lifecycle of its own; every spec is rebuilt from scratch per render pass.

pub mod indicators;
pub mod render;

pub use indicators::simple_moving_average;
pub use render::{
    candlestick_with_averages, interest_comparison, interest_histogram, single_trend,
    single_volume, trend_comparison, volume_comparison,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One named series of a chart.
///
/// Missing values stay `None` so gaps render as gaps, never as zeros.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Line {
        label: String,
        x: Vec<NaiveDate>,
        y: Vec<Option<f64>>,
    },
    Bar {
        label: String,
        x: Vec<NaiveDate>,
        y: Vec<Option<f64>>,
    },
    Candlestick {
        label: String,
        x: Vec<NaiveDate>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    },
}

impl Trace {
    pub fn label(&self) -> &str {
        match self {
            Trace::Line { label, .. }
            | Trace::Bar { label, .. }
            | Trace::Candlestick { label, .. } => label,
        }
    }
}

/// A complete visual specification: traces plus chrome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            traces: Vec::new(),
        }
    }
}
