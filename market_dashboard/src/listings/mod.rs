//! Scraped listing pages: most-active, gainers, losers, world indices,
//! ETFs, and currencies.
//!
//! These are best-effort, non-critical tables. Each page is fetched as raw
//! HTML, its first table extracted, and a fixed set of columns dropped per
//! listing kind before display.

use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Which listing page to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ListingKind {
    MostActive,
    Gainers,
    Losers,
    WorldIndices,
    Etfs,
    Currencies,
}

impl ListingKind {
    pub fn url(&self) -> &'static str {
        match self {
            ListingKind::MostActive => "https://finance.yahoo.com/most-active/",
            ListingKind::Gainers => "https://finance.yahoo.com/gainers",
            ListingKind::Losers => "https://finance.yahoo.com/losers/",
            ListingKind::WorldIndices => "https://finance.yahoo.com/world-indices/",
            ListingKind::Etfs => "https://finance.yahoo.com/etfs/",
            ListingKind::Currencies => "https://finance.yahoo.com/currencies/",
        }
    }

    /// Columns that are noise for this listing kind and are dropped right
    /// after parsing.
    pub fn dropped_columns(&self) -> &'static [&'static str] {
        match self {
            ListingKind::MostActive | ListingKind::Gainers | ListingKind::Losers => {
                &["PE Ratio (TTM)", "52 Week Range"]
            }
            ListingKind::WorldIndices => {
                &["Intraday High/Low", "52 Week Range", "Day Chart"]
            }
            ListingKind::Etfs => &["52 Week Range"],
            ListingKind::Currencies => &["52 Week Range", "Day Chart"],
        }
    }
}

/// A parsed listing page: header row plus data rows, all as text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ListingTable {
    /// Removes the named columns (and the matching cell of every row).
    /// Unknown names are ignored.
    pub fn drop_columns(&mut self, names: &[&str]) {
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !names.contains(&column.as_str()))
            .map(|(i, _)| i)
            .collect();

        self.columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        for row in &mut self.rows {
            *row = keep
                .iter()
                .filter_map(|&i| row.get(i).cloned())
                .collect();
        }
    }
}

/// Fetches and parses one listing page.
///
/// A transport failure is [`Error::ProviderUnavailable`]; a page without a
/// recognizable table is [`Error::NoData`].
pub async fn fetch_listing(client: &Client, kind: ListingKind) -> Result<ListingTable, Error> {
    let response = client
        .get(kind.url())
        .send()
        .await
        .map_err(|e| Error::ProviderUnavailable(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| Error::ProviderUnavailable(e.to_string()))?;

    let mut table = parse_first_table(&body).ok_or(Error::NoData)?;
    table.drop_columns(kind.dropped_columns());
    Ok(table)
}

/// Extracts the first `<table>` of an HTML document.
///
/// Header cells come from `<th>` elements (falling back to the first row),
/// data rows from `<td>` cells, all whitespace-normalized.
pub fn parse_first_table(html: &str) -> Option<ListingTable> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let header_selector = Selector::parse("th").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document.select(&table_selector).next()?;

    let mut columns = Vec::new();
    let mut rows = Vec::new();

    for row in table.select(&row_selector) {
        let headers: Vec<String> = row.select(&header_selector).map(cell_text).collect();
        if !headers.is_empty() && columns.is_empty() {
            columns = headers;
            continue;
        }

        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    if columns.is_empty() && rows.is_empty() {
        return None;
    }
    Some(ListingTable { columns, rows })
}

fn cell_text(cell: scraper::ElementRef<'_>) -> String {
    cell.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
