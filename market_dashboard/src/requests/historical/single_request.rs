use crate::{
    errors::Error,
    models::{
        asset::AssetClass, bar_series::BarSeries, date_range::DateRange, interval::Interval,
        request_params::HistoryRequest, symbol::Symbol,
    },
    providers::DataProvider,
};

use super::drop_unrequested_fields;

/// Fetches the history of a single symbol.
///
/// An empty symbol never reaches the provider: it means "no symbol
/// requested" and yields [`Error::EmptySelection`]. A well-formed request
/// the provider has nothing for yields [`Error::NoData`].
pub async fn fetch_single_series(
    provider: &dyn DataProvider,
    symbol: &Symbol,
    range: DateRange,
    asset_class: AssetClass,
    interval: Interval,
) -> Result<BarSeries, Error> {
    if symbol.is_empty() {
        return Err(Error::EmptySelection);
    }

    let mut request = HistoryRequest::new(vec![symbol.clone()], range, asset_class);
    request.interval = interval;

    let batch = provider.fetch_bars(request).await?;
    let batch = drop_unrequested_fields(batch, asset_class);

    batch
        .into_iter()
        .find(|series| &series.symbol == symbol && !series.bars.is_empty())
        .ok_or(Error::NoData)
}
