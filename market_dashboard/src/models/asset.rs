use serde::{Deserialize, Serialize};

/// The class of instrument a request is about.
///
/// This drives symbol normalization (currency pairs get a provider suffix)
/// and which fields survive a fetch (currency pairs carry no volume).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AssetClass {
    Equity,
    Index,
    Etf,
    Currency,
}

impl AssetClass {
    /// Whether traded volume is meaningful for this asset class.
    ///
    /// Currency pairs have no exchange volume; the column is dropped right
    /// after fetch so it never reaches the comparison frame.
    pub fn has_volume(&self) -> bool {
        !matches!(self, AssetClass::Currency)
    }
}
