//! Wire schema for the Yahoo v10 quoteSummary endpoint.

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryPayload,
}

#[derive(Deserialize, Debug)]
pub struct QuoteSummaryPayload {
    pub result: Option<Vec<Value>>,
    pub error: Option<QuoteSummaryError>,
}

/// Per-symbol API error (unknown ticker, delisted symbol).
#[derive(Deserialize, Debug)]
pub struct QuoteSummaryError {
    pub code: String,
    pub description: Option<String>,
}

/// Finds `key` in any of the result's module objects; first match wins.
///
/// Which module carries which indicator shifts between Yahoo revisions, so
/// lookup is by key rather than by module path.
pub fn find_field<'a>(modules: &'a Value, key: &str) -> Option<&'a Value> {
    modules
        .as_object()?
        .values()
        .find_map(|module| module.get(key))
}

/// Unwraps Yahoo's `{raw, fmt}` number objects; plain numbers pass through.
pub fn raw_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::Object(map) => map.get("raw").and_then(Value::as_f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn finds_a_key_across_modules() {
        let modules = json!({
            "price": {"longName": "Apple Inc."},
            "financialData": {"totalRevenue": {"raw": 383285000000.0, "fmt": "383.29B"}}
        });
        assert_eq!(
            find_field(&modules, "longName").and_then(Value::as_str),
            Some("Apple Inc.")
        );
        assert!(find_field(&modules, "nope").is_none());
    }

    #[test]
    fn raw_number_unwraps_wrapped_and_plain_values() {
        assert_eq!(raw_number(&json!({"raw": 1.5, "fmt": "1.50"})), Some(1.5));
        assert_eq!(raw_number(&json!(42)), Some(42.0));
        assert_eq!(raw_number(&json!("n/a")), None);
    }
}
