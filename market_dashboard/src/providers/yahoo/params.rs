use crate::models::request_params::HistoryRequest;

/// Builds the chart-API query string for one symbol of a request.
///
/// `period1` is inclusive and `period2` exclusive; both come straight from
/// the request's [`DateRange`](crate::models::date_range::DateRange) fetch
/// window.
pub fn construct_query(params: &HistoryRequest) -> Vec<(String, String)> {
    vec![
        (
            "period1".to_string(),
            params.range.period_start().timestamp().to_string(),
        ),
        (
            "period2".to_string(),
            params.range.period_end().timestamp().to_string(),
        ),
        (
            "interval".to_string(),
            params.interval.as_provider_code().to_string(),
        ),
        ("events".to_string(), "history".to_string()),
    ]
}
