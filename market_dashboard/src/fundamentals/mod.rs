//! Company fundamentals and financial statements.
//!
//! Best-effort tables over Yahoo's v10 quoteSummary endpoint: a fixed set of
//! key indicators per company, and the three financial statements (balance
//! sheet, income statement, cash flow) with one column per reported period.
//! Display labels go through a request-scoped [`LabelTranslator`] passed into
//! every table builder.

mod labels;
pub use labels::{ChineseLabels, EnglishLabels, LabelTranslator, Language};

mod response;
use response::QuoteSummaryEnvelope;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::Error, models::symbol::Symbol};

const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";

const FUNDAMENTALS_MODULES: &str =
    "price,assetProfile,summaryDetail,financialData,defaultKeyStatistics";

#[derive(Clone, Copy)]
enum IndicatorKind {
    Text,
    Number,
    Percent,
}

/// The indicator set shown for every company, in display order.
const INDICATORS: &[(&str, &str, IndicatorKind)] = &[
    ("longName", "Company Name", IndicatorKind::Text),
    ("country", "Country", IndicatorKind::Text),
    ("city", "City", IndicatorKind::Text),
    ("marketCap", "Market Cap", IndicatorKind::Number),
    ("totalRevenue", "Total Revenue", IndicatorKind::Number),
    ("grossMargins", "Gross Margin", IndicatorKind::Percent),
    ("operatingMargins", "Operating Margin", IndicatorKind::Percent),
    ("profitMargins", "Profit Margin", IndicatorKind::Percent),
    ("trailingEps", "Trailing EPS", IndicatorKind::Number),
    ("pegRatio", "PEG Ratio", IndicatorKind::Number),
    ("dividendRate", "Dividend Rate", IndicatorKind::Percent),
    ("payoutRatio", "Payout Ratio", IndicatorKind::Percent),
    ("bookValue", "Book Value", IndicatorKind::Number),
    ("operatingCashflow", "Operating Cash Flow", IndicatorKind::Number),
    ("freeCashflow", "Free Cash Flow", IndicatorKind::Number),
    ("returnOnEquity", "Return on Equity", IndicatorKind::Percent),
];

/// One labeled indicator row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundamentalRow {
    pub label: String,
    pub value: String,
}

/// Key indicators for one company, already labeled and formatted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsTable {
    pub rows: Vec<FundamentalRow>,
}

/// Which financial statement to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StatementKind {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl StatementKind {
    fn module(&self) -> &'static str {
        match self {
            StatementKind::BalanceSheet => "balanceSheetHistory",
            StatementKind::IncomeStatement => "incomeStatementHistory",
            StatementKind::CashFlow => "cashflowStatementHistory",
        }
    }

    /// Key of the statement array inside the module object.
    fn statements_key(&self) -> &'static str {
        match self {
            StatementKind::BalanceSheet => "balanceSheetStatements",
            StatementKind::IncomeStatement => "incomeStatementHistory",
            StatementKind::CashFlow => "cashflowStatements",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatementKind::BalanceSheet => "Balance Sheet",
            StatementKind::IncomeStatement => "Income Statement",
            StatementKind::CashFlow => "Cash Flow Statement",
        }
    }
}

/// One statement line item across all reported periods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub label: String,
    pub values: Vec<String>,
}

/// A financial statement: one column per reported period, newest first as
/// the provider returns them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    pub title: String,
    pub periods: Vec<String>,
    pub rows: Vec<StatementRow>,
}

/// Fetches the key-indicator table for one company.
///
/// A transport failure is [`Error::ProviderUnavailable`]; a symbol the
/// endpoint does not know is [`Error::NoData`].
pub async fn fetch_fundamentals(
    client: &Client,
    symbol: &Symbol,
    labels: &dyn LabelTranslator,
) -> Result<FundamentalsTable, Error> {
    let modules = fetch_modules(client, symbol, FUNDAMENTALS_MODULES).await?;
    Ok(build_fundamentals(&modules, labels))
}

/// Fetches one financial statement for one company.
pub async fn fetch_statement(
    client: &Client,
    symbol: &Symbol,
    kind: StatementKind,
    labels: &dyn LabelTranslator,
) -> Result<StatementTable, Error> {
    let modules = fetch_modules(client, symbol, kind.module()).await?;
    build_statement(&modules, kind, labels).ok_or(Error::NoData)
}

async fn fetch_modules(
    client: &Client,
    symbol: &Symbol,
    modules: &str,
) -> Result<Value, Error> {
    if symbol.is_empty() {
        return Err(Error::EmptySelection);
    }

    let url = format!("{QUOTE_SUMMARY_URL}/{symbol}");
    let response = client
        .get(&url)
        .query(&[("modules", modules)])
        .send()
        .await
        .map_err(|e| Error::ProviderUnavailable(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| Error::ProviderUnavailable(e.to_string()))?;

    let envelope: QuoteSummaryEnvelope =
        serde_json::from_str(&body).map_err(|e| Error::ProviderUnavailable(e.to_string()))?;
    if let Some(error) = envelope.quote_summary.error {
        log::warn!("[{symbol}] quoteSummary returned no data ({})", error.code);
        return Err(Error::NoData);
    }
    envelope
        .quote_summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or(Error::NoData)
}

fn build_fundamentals(modules: &Value, labels: &dyn LabelTranslator) -> FundamentalsTable {
    let mut rows = Vec::with_capacity(INDICATORS.len());
    for (key, label, kind) in INDICATORS {
        // Indicators the company does not report stay in the table with an
        // empty value.
        let value = match response::find_field(modules, key) {
            Some(field) => match kind {
                IndicatorKind::Text => field.as_str().unwrap_or_default().to_string(),
                IndicatorKind::Number => response::raw_number(field)
                    .map(format_number)
                    .unwrap_or_default(),
                IndicatorKind::Percent => response::raw_number(field)
                    .map(format_percent)
                    .unwrap_or_default(),
            },
            None => String::new(),
        };
        rows.push(FundamentalRow {
            label: labels.translate(label),
            value,
        });
    }
    FundamentalsTable { rows }
}

fn build_statement(
    modules: &Value,
    kind: StatementKind,
    labels: &dyn LabelTranslator,
) -> Option<StatementTable> {
    let statements = modules
        .get(kind.module())?
        .get(kind.statements_key())?
        .as_array()?;
    if statements.is_empty() {
        return None;
    }

    let periods: Vec<String> = statements
        .iter()
        .map(|statement| {
            statement
                .get("endDate")
                .and_then(|date| date.get("fmt"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect();

    // Line items in first-seen order across periods; periods can differ in
    // which items they report.
    let mut keys: Vec<&str> = Vec::new();
    for statement in statements {
        for key in statement.as_object()?.keys() {
            if key == "endDate" || key == "maxAge" {
                continue;
            }
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }

    let rows = keys
        .into_iter()
        .map(|key| StatementRow {
            label: labels.translate(&humanize_key(key)),
            values: statements
                .iter()
                .map(|statement| {
                    statement
                        .get(key)
                        .and_then(response::raw_number)
                        .map(format_number)
                        .unwrap_or_default()
                })
                .collect(),
        })
        .collect();

    Some(StatementTable {
        title: labels.translate(kind.title()),
        periods,
        rows,
    })
}

/// `totalCurrentAssets` -> `Total Current Assets`.
fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

/// Thousands separators for magnitudes of 1000 and up; smaller values keep
/// their fractional part.
fn format_number(value: f64) -> String {
    if value.abs() >= 1000.0 {
        group_thousands(value)
    } else {
        format!("{value}")
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.abs().round() as u128;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::AssetClass;

    const MODULES_FIXTURE: &str = r#"{
        "price": {"longName": "Apple Inc.", "marketCap": {"raw": 2994371780608.0, "fmt": "2.99T"}},
        "assetProfile": {"country": "United States", "city": "Cupertino"},
        "financialData": {
            "totalRevenue": {"raw": 383285000000.0, "fmt": "383.29B"},
            "grossMargins": {"raw": 0.44131, "fmt": "44.13%"},
            "returnOnEquity": {"raw": 1.4725, "fmt": "147.25%"},
            "freeCashflow": {"raw": 84726874112.0, "fmt": "84.73B"}
        },
        "defaultKeyStatistics": {"trailingEps": {"raw": 6.13, "fmt": "6.13"}}
    }"#;

    const STATEMENT_FIXTURE: &str = r#"{
        "balanceSheetHistory": {
            "balanceSheetStatements": [
                {
                    "maxAge": 1,
                    "endDate": {"raw": 1695945600, "fmt": "2023-09-30"},
                    "cash": {"raw": 29965000000.0, "fmt": "29.97B"},
                    "totalAssets": {"raw": 352583000000.0, "fmt": "352.58B"}
                },
                {
                    "maxAge": 1,
                    "endDate": {"raw": 1664150400, "fmt": "2022-09-24"},
                    "cash": {"raw": 23646000000.0, "fmt": "23.65B"},
                    "totalAssets": {"raw": 352755000000.0, "fmt": "352.76B"},
                    "inventory": {"raw": 4946000000.0, "fmt": "4.95B"}
                }
            ]
        }
    }"#;

    fn modules() -> Value {
        serde_json::from_str(MODULES_FIXTURE).unwrap()
    }

    #[test]
    fn builds_the_full_indicator_set_in_order() {
        let table = build_fundamentals(&modules(), &ChineseLabels);

        assert_eq!(table.rows.len(), INDICATORS.len());
        assert_eq!(table.rows[0].label, "公司名稱");
        assert_eq!(table.rows[0].value, "Apple Inc.");
        assert_eq!(table.rows[3].label, "市值");
        assert_eq!(table.rows[3].value, "2,994,371,780,608");
    }

    #[test]
    fn percent_indicators_are_formatted_as_percentages() {
        let table = build_fundamentals(&modules(), &EnglishLabels);

        let gross = table.rows.iter().find(|r| r.label == "Gross Margin").unwrap();
        assert_eq!(gross.value, "44.13%");
        let roe = table
            .rows
            .iter()
            .find(|r| r.label == "Return on Equity")
            .unwrap();
        assert_eq!(roe.value, "147.25%");
    }

    #[test]
    fn unreported_indicators_stay_as_empty_rows() {
        let table = build_fundamentals(&modules(), &EnglishLabels);

        let peg = table.rows.iter().find(|r| r.label == "PEG Ratio").unwrap();
        assert_eq!(peg.value, "");
    }

    #[test]
    fn small_numbers_keep_their_fraction() {
        let table = build_fundamentals(&modules(), &EnglishLabels);

        let eps = table
            .rows
            .iter()
            .find(|r| r.label == "Trailing EPS")
            .unwrap();
        assert_eq!(eps.value, "6.13");
    }

    #[test]
    fn builds_a_statement_with_one_column_per_period() {
        let modules: Value = serde_json::from_str(STATEMENT_FIXTURE).unwrap();
        let table =
            build_statement(&modules, StatementKind::BalanceSheet, &ChineseLabels).unwrap();

        assert_eq!(table.title, "資產負債表");
        assert_eq!(table.periods, vec!["2023-09-30", "2022-09-24"]);

        let assets = table.rows.iter().find(|r| r.label == "總資產").unwrap();
        assert_eq!(assets.values, vec!["352,583,000,000", "352,755,000,000"]);

        // Reported only for the older period; the newer column stays empty.
        let inventory = table.rows.iter().find(|r| r.label == "Inventory").unwrap();
        assert_eq!(inventory.values, vec!["", "4,946,000,000"]);
    }

    #[test]
    fn empty_statement_history_is_none() {
        let modules: Value = serde_json::from_str(
            r#"{"balanceSheetHistory": {"balanceSheetStatements": []}}"#,
        )
        .unwrap();
        assert!(build_statement(&modules, StatementKind::BalanceSheet, &EnglishLabels).is_none());
    }

    #[test]
    fn camel_case_keys_humanize() {
        assert_eq!(humanize_key("totalCurrentAssets"), "Total Current Assets");
        assert_eq!(humanize_key("cash"), "Cash");
        assert_eq!(humanize_key("netIncome"), "Net Income");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_number(999.5), "999.5");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(-2994371780608.0), "-2,994,371,780,608");
    }

    #[tokio::test]
    async fn empty_symbol_is_an_empty_selection() {
        let client = Client::new();
        let symbol = Symbol::normalize("", AssetClass::Equity);
        let result = fetch_fundamentals(&client, &symbol, &EnglishLabels).await;
        assert!(matches!(result, Err(Error::EmptySelection)));
    }
}
