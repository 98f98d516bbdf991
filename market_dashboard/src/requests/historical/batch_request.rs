use crate::{
    errors::Error,
    models::{
        asset::AssetClass, date_range::DateRange, frame::ComparisonFrame, interval::Interval,
        request_params::HistoryRequest, symbol::Symbol,
    },
    providers::DataProvider,
};

use super::drop_unrequested_fields;

/// Fetches aligned histories for a symbol set and builds the comparison
/// frame.
///
/// The whole set goes out as one provider call; per-symbol absence in the
/// result is silently reflected in the frame, never an error. Only an empty
/// selection, a completely empty result, or a provider failure is reported.
pub async fn fetch_comparison_frame(
    provider: &dyn DataProvider,
    symbols: &[Symbol],
    range: DateRange,
    asset_class: AssetClass,
    interval: Interval,
) -> Result<ComparisonFrame, Error> {
    let requested: Vec<Symbol> = symbols
        .iter()
        .filter(|symbol| !symbol.is_empty())
        .cloned()
        .collect();
    if requested.is_empty() {
        return Err(Error::EmptySelection);
    }

    let mut request = HistoryRequest::new(requested.clone(), range, asset_class);
    request.interval = interval;

    let batch = provider.fetch_bars(request).await?;
    let batch = drop_unrequested_fields(batch, asset_class);

    let frame = ComparisonFrame::from_batch(batch, &requested);
    if frame.is_empty() {
        return Err(Error::NoData);
    }
    Ok(frame)
}
