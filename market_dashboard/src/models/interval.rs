use serde::{Deserialize, Serialize};

/// The time interval of each bar in a history request.
///
/// The dashboard only deals in the intervals its provider exposes for daily
/// history pages. Each variant maps to the provider's interval code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Interval {
    #[default]
    Day,
    Week,
    Month,
}

impl Interval {
    /// Provider-side interval code.
    pub fn as_provider_code(&self) -> &'static str {
        match self {
            Interval::Day => "1d",
            Interval::Week => "1wk",
            Interval::Month => "1mo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_codes() {
        assert_eq!(Interval::Day.as_provider_code(), "1d");
        assert_eq!(Interval::Week.as_provider_code(), "1wk");
        assert_eq!(Interval::Month.as_provider_code(), "1mo");
    }
}
