//! Assembly of chart specs from frames and series.

use crate::{
    charts::{ChartSpec, Trace, simple_moving_average},
    errors::Error,
    models::{bar_series::BarSeries, frame::ComparisonFrame},
    trends::InterestFrame,
};

/// Close-price comparison: one line trace per symbol present in the frame,
/// in frame iteration order.
pub fn trend_comparison(frame: &ComparisonFrame) -> ChartSpec {
    let mut spec = ChartSpec::new("Trend comparison", "Date", "Price");
    for (symbol, series) in frame.iter() {
        spec.traces.push(Trace::Line {
            label: symbol.to_string(),
            x: series.dates(),
            y: series.bars.iter().map(|bar| Some(bar.close)).collect(),
        });
    }
    spec
}

/// Volume comparison: one bar trace per symbol that actually carries volume.
/// Volumeless series (currency pairs) are omitted rather than drawn flat.
pub fn volume_comparison(frame: &ComparisonFrame) -> ChartSpec {
    let mut spec = ChartSpec::new("Volume comparison", "Date", "Volume");
    for (symbol, series) in frame.iter() {
        if !series.has_volume() {
            continue;
        }
        spec.traces.push(Trace::Bar {
            label: symbol.to_string(),
            x: series.dates(),
            y: series.bars.iter().map(|bar| bar.volume).collect(),
        });
    }
    spec
}

/// Close-price trend of a single series.
pub fn single_trend(series: &BarSeries) -> ChartSpec {
    let mut spec = ChartSpec::new("Closing price trend", "Date", "Price");
    spec.traces.push(Trace::Line {
        label: series.symbol.to_string(),
        x: series.dates(),
        y: series.bars.iter().map(|bar| Some(bar.close)).collect(),
    });
    spec
}

/// Traded volume of a single series.
pub fn single_volume(series: &BarSeries) -> ChartSpec {
    let mut spec = ChartSpec::new("Traded volume", "Date", "Volume");
    spec.traces.push(Trace::Bar {
        label: series.symbol.to_string(),
        x: series.dates(),
        y: series.bars.iter().map(|bar| bar.volume).collect(),
    });
    spec
}

/// Candlestick chart of one series with a trailing simple moving average per
/// requested window, computed over Close.
///
/// Window sizes must be at least 1; zero is rejected with
/// [`Error::InvalidParameter`]. The first `window - 1` points of each
/// average are gaps, not zeros.
pub fn candlestick_with_averages(
    series: &BarSeries,
    windows: &[u32],
) -> Result<ChartSpec, Error> {
    if let Some(bad) = windows.iter().find(|&&window| window == 0) {
        return Err(Error::InvalidParameter(format!(
            "moving average window must be positive, got {bad}"
        )));
    }

    let dates = series.dates();
    let closes = series.closes();

    let mut spec = ChartSpec::new("Candlestick", "Date", "Price");
    spec.traces.push(Trace::Candlestick {
        label: series.symbol.to_string(),
        x: dates.clone(),
        open: series.bars.iter().map(|bar| bar.open).collect(),
        high: series.bars.iter().map(|bar| bar.high).collect(),
        low: series.bars.iter().map(|bar| bar.low).collect(),
        close: closes.clone(),
    });

    for &window in windows {
        spec.traces.push(Trace::Line {
            label: format!("MAV-{window}"),
            x: dates.clone(),
            y: simple_moving_average(&closes, window as usize),
        });
    }

    Ok(spec)
}

/// Search-interest comparison as lines, one trace per keyword.
pub fn interest_comparison(frame: &InterestFrame) -> ChartSpec {
    let mut spec = ChartSpec::new("Search interest", "Date", "Interest");
    for series in &frame.series {
        spec.traces.push(Trace::Line {
            label: series.keyword.clone(),
            x: series.points.iter().map(|(date, _)| *date).collect(),
            y: series
                .points
                .iter()
                .map(|(_, value)| Some(f64::from(*value)))
                .collect(),
        });
    }
    spec
}

/// Search-interest comparison as bars, one trace per keyword.
pub fn interest_histogram(frame: &InterestFrame) -> ChartSpec {
    let mut spec = ChartSpec::new("Search interest histogram", "Date", "Interest");
    for series in &frame.series {
        spec.traces.push(Trace::Bar {
            label: series.keyword.clone(),
            x: series.points.iter().map(|(date, _)| *date).collect(),
            y: series
                .points
                .iter()
                .map(|(_, value)| Some(f64::from(*value)))
                .collect(),
        });
    }
    spec
}
