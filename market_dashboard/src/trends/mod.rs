//! Search-interest trends.
//!
//! Two-step flow against Google's trends API: an explore request yields a
//! token for the time-series widget, whose data endpoint returns interest
//! values per keyword. The upstream is rate-limited without documentation
//! and regularly answers with garbled or empty payloads; that is a normal
//! outcome here and yields an empty frame, never an error.

use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::{config::Config, errors::Error, models::date_range::DateRange};

const EXPLORE_URL: &str = "https://trends.google.com/trends/api/explore";
const MULTILINE_URL: &str = "https://trends.google.com/trends/api/widgetdata/multiline";

/// At most five keywords per request, an upstream limit.
pub const MAX_KEYWORDS: usize = 5;

/// Locale pair (interface language, timezone offset in minutes) for the
/// trends request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TrendLocale {
    Taipei,
    NewYork,
}

impl TrendLocale {
    pub fn language(&self) -> &'static str {
        match self {
            TrendLocale::Taipei => "zh-TW",
            TrendLocale::NewYork => "en-US",
        }
    }

    pub fn timezone_offset_minutes(&self) -> i32 {
        match self {
            TrendLocale::Taipei => 480,
            TrendLocale::NewYork => -300,
        }
    }
}

/// Interest values over time for one keyword.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterestSeries {
    pub keyword: String,
    pub points: Vec<(NaiveDate, u32)>,
}

/// Per-keyword interest series, in request keyword order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterestFrame {
    pub series: Vec<InterestSeries>,
}

impl InterestFrame {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.points.is_empty())
    }
}

/// Client for the search-interest provider.
pub struct TrendsClient {
    client: Client,
    locale: TrendLocale,
}

impl TrendsClient {
    pub fn new(config: &Config, locale: TrendLocale) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self { client, locale })
    }

    /// Fetches interest-over-time for up to [`MAX_KEYWORDS`] keywords.
    ///
    /// Transport failures are [`Error::ProviderUnavailable`]; a garbled or
    /// empty upstream payload yields an empty frame with a warning.
    pub async fn interest_over_time(
        &self,
        keywords: &[String],
        range: DateRange,
    ) -> Result<InterestFrame, Error> {
        let keywords: Vec<&String> = keywords.iter().filter(|k| !k.trim().is_empty()).collect();
        if keywords.is_empty() {
            return Err(Error::EmptySelection);
        }
        if keywords.len() > MAX_KEYWORDS {
            return Err(Error::InvalidParameter(format!(
                "at most {MAX_KEYWORDS} keywords per trends request, got {}",
                keywords.len()
            )));
        }
        let keywords: Vec<String> = keywords.into_iter().map(|k| k.trim().to_string()).collect();

        let explore_body = self
            .get_text(
                EXPLORE_URL,
                &[("req", build_explore_request(&keywords, range).to_string())],
            )
            .await?;
        let Some(widget) = parse_explore(&explore_body) else {
            log::warn!("trends explore response was garbled; returning empty frame");
            return Ok(InterestFrame::default());
        };

        let multiline_body = self
            .get_text(
                MULTILINE_URL,
                &[("req", widget.request.to_string()), ("token", widget.token)],
            )
            .await?;
        Ok(parse_multiline(&multiline_body, &keywords).unwrap_or_else(|| {
            log::warn!("trends timeline response was garbled; returning empty frame");
            InterestFrame::default()
        }))
    }

    async fn get_text(&self, url: &str, extra: &[(&str, String)]) -> Result<String, Error> {
        let mut query: Vec<(&str, String)> = vec![
            ("hl", self.locale.language().to_string()),
            ("tz", self.locale.timezone_offset_minutes().to_string()),
        ];
        query.extend(extra.iter().cloned());

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::ProviderUnavailable(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| Error::ProviderUnavailable(e.to_string()))
    }
}

/// The explore payload: one comparison item per keyword over the range.
fn build_explore_request(keywords: &[String], range: DateRange) -> serde_json::Value {
    let time = format!("{} {}", range.start(), range.end());
    let items: Vec<serde_json::Value> = keywords
        .iter()
        .map(|keyword| json!({"keyword": keyword, "geo": "", "time": time}))
        .collect();
    json!({"comparisonItem": items, "category": 0, "property": ""})
}

/// Trends responses are JSONP-armored with a `)]}'` prefix before the JSON
/// document; strip everything up to the first brace.
fn strip_response_prefix(body: &str) -> &str {
    match body.find('{') {
        Some(index) => &body[index..],
        None => "",
    }
}

struct TimeseriesWidget {
    token: String,
    request: serde_json::Value,
}

#[derive(Deserialize)]
struct ExploreResponse {
    widgets: Vec<ExploreWidget>,
}

#[derive(Deserialize)]
struct ExploreWidget {
    id: String,
    token: Option<String>,
    request: Option<serde_json::Value>,
}

fn parse_explore(body: &str) -> Option<TimeseriesWidget> {
    let response: ExploreResponse = serde_json::from_str(strip_response_prefix(body)).ok()?;
    response
        .widgets
        .into_iter()
        .find(|widget| widget.id == "TIMESERIES")
        .and_then(|widget| {
            Some(TimeseriesWidget {
                token: widget.token?,
                request: widget.request?,
            })
        })
}

#[derive(Deserialize)]
struct MultilineResponse {
    default: MultilineDefault,
}

#[derive(Deserialize)]
struct MultilineDefault {
    #[serde(rename = "timelineData")]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Deserialize)]
struct TimelinePoint {
    time: String,
    #[serde(default)]
    value: Vec<u32>,
}

fn parse_multiline(body: &str, keywords: &[String]) -> Option<InterestFrame> {
    let response: MultilineResponse =
        serde_json::from_str(strip_response_prefix(body)).ok()?;

    let mut series: Vec<InterestSeries> = keywords
        .iter()
        .map(|keyword| InterestSeries {
            keyword: keyword.clone(),
            points: Vec::new(),
        })
        .collect();

    for point in response.default.timeline_data {
        let timestamp: i64 = point.time.parse().ok()?;
        let date = DateTime::from_timestamp(timestamp, 0)?.date_naive();
        for (i, entry) in series.iter_mut().enumerate() {
            if let Some(&value) = point.value.get(i) {
                entry.points.push((date, value));
            }
        }
    }

    Some(InterestFrame { series })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn strips_jsonp_prefix() {
        assert_eq!(strip_response_prefix(")]}',\n{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_response_prefix("garbage without json"), "");
    }

    #[test]
    fn explore_request_spans_the_range() {
        let request = build_explore_request(&["rust".to_string()], range());
        let item = &request["comparisonItem"][0];
        assert_eq!(item["keyword"], "rust");
        assert_eq!(item["time"], "2023-01-01 2023-01-31");
    }

    #[test]
    fn parses_explore_widget_token() {
        let body = r#")]}'
            {"widgets": [
                {"id": "TIMESERIES", "token": "abc123", "request": {"locale": "en-US"}},
                {"id": "RELATED_QUERIES", "token": "zzz"}
            ]}"#;
        let widget = parse_explore(body).unwrap();
        assert_eq!(widget.token, "abc123");
        assert_eq!(widget.request["locale"], "en-US");
    }

    #[test]
    fn parses_multiline_timeline() {
        let body = r#")]}',
            {"default": {"timelineData": [
                {"time": "1672531200", "formattedTime": "Jan 1, 2023", "value": [42, 7]},
                {"time": "1672617600", "formattedTime": "Jan 2, 2023", "value": [58, 9]}
            ]}}"#;
        let keywords = vec!["rust".to_string(), "go".to_string()];
        let frame = parse_multiline(body, &keywords).unwrap();

        assert_eq!(frame.series.len(), 2);
        assert_eq!(frame.series[0].keyword, "rust");
        assert_eq!(
            frame.series[0].points,
            vec![
                (NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 42),
                (NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), 58),
            ]
        );
        assert_eq!(frame.series[1].points[1].1, 9);
    }

    #[test]
    fn garbled_payloads_parse_to_none() {
        assert!(parse_explore("rate limited, try later").is_none());
        assert!(parse_multiline(")]}'{broken", &["a".to_string()]).is_none());
    }

    #[tokio::test]
    async fn too_many_keywords_are_rejected() {
        let client = TrendsClient::new(&Config::default(), TrendLocale::Taipei).unwrap();
        let keywords: Vec<String> = (0..6).map(|i| format!("kw{i}")).collect();
        let result = client.interest_over_time(&keywords, range()).await;
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn empty_keywords_are_an_empty_selection() {
        let client = TrendsClient::new(&Config::default(), TrendLocale::NewYork).unwrap();
        let result = client
            .interest_over_time(&[" ".to_string()], range())
            .await;
        assert!(matches!(result, Err(Error::EmptySelection)));
    }
}
