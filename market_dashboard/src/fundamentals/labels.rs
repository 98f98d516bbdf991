//! Display-label translation for fundamentals output.
//!
//! Translation is a request-scoped collaborator: whatever builds a table
//! receives a [`LabelTranslator`] explicitly and uses it for every label.
//! There is no process-wide translator state.

/// Translates a canonical English display label for output.
pub trait LabelTranslator {
    fn translate(&self, label: &str) -> String;
}

/// Output language for fundamentals tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    Chinese,
    English,
}

impl Language {
    pub fn labels(&self) -> &'static dyn LabelTranslator {
        match self {
            Language::Chinese => &ChineseLabels,
            Language::English => &EnglishLabels,
        }
    }
}

/// Identity translation: canonical labels pass through unchanged.
pub struct EnglishLabels;

impl LabelTranslator for EnglishLabels {
    fn translate(&self, label: &str) -> String {
        label.to_string()
    }
}

/// Traditional-Chinese labels from a fixed lexicon.
///
/// Labels without a lexicon entry fall back to the English input, so a new
/// upstream line item degrades to untranslated rather than disappearing.
pub struct ChineseLabels;

const LEXICON: &[(&str, &str)] = &[
    // key indicators
    ("Company Name", "公司名稱"),
    ("Country", "國家"),
    ("City", "城市"),
    ("Market Cap", "市值"),
    ("Total Revenue", "總收入"),
    ("Gross Margin", "毛利率"),
    ("Operating Margin", "營業利潤率"),
    ("Profit Margin", "净利率"),
    ("Trailing EPS", "每股收益"),
    ("PEG Ratio", "PEG 比率"),
    ("Dividend Rate", "股息率"),
    ("Payout Ratio", "股息支付比例"),
    ("Book Value", "每股淨資產"),
    ("Operating Cash Flow", "營運現金流"),
    ("Free Cash Flow", "自由現金流"),
    ("Return on Equity", "股東權益報酬率"),
    // statement titles
    ("Balance Sheet", "資產負債表"),
    ("Income Statement", "損益表"),
    ("Cash Flow Statement", "現金流量表"),
    // common statement line items
    ("Cash", "現金"),
    ("Total Assets", "總資產"),
    ("Total Current Assets", "流動資產合計"),
    ("Total Current Liabilities", "流動負債合計"),
    ("Gross Profit", "毛利"),
    ("Operating Income", "營業利益"),
    ("Net Income", "淨利"),
    ("Total Cash From Operating Activities", "營運現金流量"),
    ("Capital Expenditures", "資本支出"),
    ("Dividends Paid", "支付股利"),
];

impl LabelTranslator for ChineseLabels {
    fn translate(&self, label: &str) -> String {
        LEXICON
            .iter()
            .find(|(english, _)| *english == label)
            .map(|(_, chinese)| (*chinese).to_string())
            .unwrap_or_else(|| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chinese_labels_come_from_the_lexicon() {
        assert_eq!(ChineseLabels.translate("Market Cap"), "市值");
        assert_eq!(ChineseLabels.translate("Balance Sheet"), "資產負債表");
    }

    #[test]
    fn unknown_labels_fall_back_to_english() {
        assert_eq!(
            ChineseLabels.translate("Deferred Long Term Asset Charges"),
            "Deferred Long Term Asset Charges"
        );
    }

    #[test]
    fn english_labels_pass_through() {
        assert_eq!(EnglishLabels.translate("Market Cap"), "Market Cap");
    }
}
