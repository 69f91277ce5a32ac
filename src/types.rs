// =============================================================================
// Shared types: price bars, price series, asset kind
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar.
///
/// Only `close` is read by the indicator engine; the other fields are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl PriceBar {
    /// Bar whose open/high/low all equal `close`. Handy for tests and demos.
    pub fn flat(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }
}

/// Ordered daily bars, oldest first.
///
/// No ordering, uniqueness or gap-free check is performed; short and empty
/// series are valid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Closing prices in series order (oldest first).
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Close of the newest bar, if any.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }
}

impl From<Vec<PriceBar>> for PriceSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::new(bars)
    }
}

impl FromIterator<PriceBar> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceBar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Kind of instrument being analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Crypto,
}

impl AssetType {
    /// Quote currency the prices are expressed in.
    pub fn currency_code(self) -> &'static str {
        match self {
            Self::Stock => "TL",
            Self::Crypto => "USD",
        }
    }
}

impl Default for AssetType {
    fn default() -> Self {
        Self::Stock
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    #[test]
    fn closes_preserve_order() {
        let series: PriceSeries = [10.0, 11.0, 9.5]
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::flat(day(i as u32 + 1), c))
            .collect();
        assert_eq!(series.closes(), vec![10.0, 11.0, 9.5]);
        assert_eq!(series.last_close(), Some(9.5));
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn empty_series_has_no_last_close() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
    }

    #[test]
    fn series_deserialises_from_bar_array() {
        let json = r#"[
            { "date": "2024-01-02", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 100.0 },
            { "date": "2024-01-03", "close": 1.7 }
        ]"#;
        let series: PriceSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[0].date, day(2));
        assert!((series.bars()[1].close - 1.7).abs() < 1e-12);
        assert_eq!(series.bars()[1].volume, 0.0);
    }

    #[test]
    fn asset_type_currency() {
        assert_eq!(AssetType::Stock.currency_code(), "TL");
        assert_eq!(AssetType::Crypto.currency_code(), "USD");
        assert_eq!(AssetType::default(), AssetType::Stock);
        let parsed: AssetType = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(parsed, AssetType::Crypto);
    }
}
