//! Canonical ticker symbols.
//!
//! User-entered tickers are normalized exactly once, at the edge; everything
//! downstream treats a [`Symbol`] as an opaque, immutable string compared by
//! exact match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::asset::AssetClass;

/// Suffix Yahoo uses to mark currency-pair tickers (e.g. `TWD=X`, `EURUSD=X`).
const CURRENCY_SUFFIX: &str = "=X";

/// A normalized identifier for a tradable instrument or currency pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Canonicalizes a user-entered ticker for the given asset class.
    ///
    /// Uppercases the input. For [`AssetClass::Currency`] the provider suffix
    /// is appended when missing; the three documented input shapes all reduce
    /// to string concatenation:
    ///
    /// - bare code (`"TWD"` → `"TWD=X"`, quoted against the US dollar),
    /// - two concatenated codes (`"TWDGBP"` → `"TWDGBP=X"`),
    /// - already-suffixed input (`"TWD=X"`, passed through).
    ///
    /// No validation happens here. Mistyped codes and missing exchange
    /// suffixes on non-US equities are deferred to the fetch step, which
    /// skips symbols the provider does not recognize. Empty input stays
    /// empty; the fetch layer treats it as "no symbol requested".
    pub fn normalize(raw: &str, asset_class: AssetClass) -> Symbol {
        let mut ticker = raw.trim().to_uppercase();
        if ticker.is_empty() {
            return Symbol(ticker);
        }
        if asset_class == AssetClass::Currency && !ticker.ends_with(CURRENCY_SUFFIX) {
            ticker.push_str(CURRENCY_SUFFIX);
        }
        Symbol(ticker)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
