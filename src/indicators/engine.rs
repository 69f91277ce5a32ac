// =============================================================================
// Indicator Engine: one-shot aggregate over a price series
// =============================================================================
//
// Computes RSI, SMA(20/50/200), volatility and the composite risk score from
// the closes of a `PriceSeries`.  The individual calculations share no state
// and may run in any order; only the risk score depends on the volatility.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::risk_score::{calculate_risk_score, DEFAULT_MOMENTUM_WINDOW};
use super::rsi::{calculate_rsi, DEFAULT_RSI_PERIOD};
use super::sma::calculate_sma;
use super::volatility::{calculate_volatility, DEFAULT_VOLATILITY_PERIOD};
use crate::types::PriceSeries;

fn default_rsi_period() -> usize {
    DEFAULT_RSI_PERIOD
}

fn default_volatility_period() -> usize {
    DEFAULT_VOLATILITY_PERIOD
}

fn default_momentum_window() -> usize {
    DEFAULT_MOMENTUM_WINDOW
}

/// Look-back windows for the configurable indicators.
///
/// The SMA windows are fixed at 20 / 50 / 200 since the output fields are
/// named after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    #[serde(default = "default_volatility_period")]
    pub volatility_period: usize,

    /// Bars spanned by the momentum component of the risk score.
    #[serde(default = "default_momentum_window")]
    pub momentum_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            volatility_period: default_volatility_period(),
            momentum_window: default_momentum_window(),
        }
    }
}

/// Snapshot of every indicator for the newest bar of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    /// Relative Strength Index in [0, 100].
    pub rsi: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub sma200: f64,
    /// Coefficient-of-variation volatility, percent.
    pub volatility: f64,
    /// Composite risk in 0..=100.
    pub risk_score: u8,
    /// Close of the newest bar, 0.0 for an empty series.
    pub current_price: f64,
}

/// Compute all indicators with the default windows.
pub fn compute_indicators(series: &PriceSeries) -> TechnicalIndicators {
    compute_indicators_with(series, &IndicatorParams::default())
}

/// Compute all indicators with explicit look-back windows.
pub fn compute_indicators_with(series: &PriceSeries, params: &IndicatorParams) -> TechnicalIndicators {
    let closes = series.closes();

    let rsi = calculate_rsi(&closes, params.rsi_period);
    let sma20 = calculate_sma(&closes, 20);
    let sma50 = calculate_sma(&closes, 50);
    let sma200 = calculate_sma(&closes, 200);
    let volatility = calculate_volatility(&closes, params.volatility_period);
    let risk_score = calculate_risk_score(&closes, volatility, params.momentum_window);
    let current_price = series.last_close().unwrap_or(0.0);

    debug!(
        bars = closes.len(),
        rsi,
        sma20,
        sma50,
        sma200,
        volatility,
        risk_score,
        current_price,
        "indicators computed"
    );

    TechnicalIndicators {
        rsi,
        sma20,
        sma50,
        sma200,
        volatility,
        risk_score,
        current_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceBar;
    use chrono::{Duration, NaiveDate};

    fn series_of(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::flat(start + Duration::days(i as i64), c))
            .collect()
    }

    #[test]
    fn empty_series_uses_fallbacks() {
        let ind = compute_indicators(&PriceSeries::default());
        assert_eq!(ind.rsi, 50.0);
        assert_eq!(ind.sma20, 0.0);
        assert_eq!(ind.sma50, 0.0);
        assert_eq!(ind.sma200, 0.0);
        assert_eq!(ind.volatility, 0.0);
        assert_eq!(ind.risk_score, 0);
        assert_eq!(ind.current_price, 0.0);
    }

    #[test]
    fn single_bar_series() {
        let ind = compute_indicators(&series_of(&[42.5]));
        assert_eq!(ind.rsi, 50.0);
        assert_eq!(ind.sma20, 42.5);
        assert_eq!(ind.sma200, 42.5);
        assert_eq!(ind.current_price, 42.5);
        assert_eq!(ind.risk_score, 0);
    }

    #[test]
    fn flat_series_of_25() {
        let ind = compute_indicators(&series_of(&[100.0; 25]));
        // Zero average loss => 100, even with no gains.
        assert_eq!(ind.rsi, 100.0);
        assert_eq!(ind.sma20, 100.0);
        assert_eq!(ind.sma50, 100.0);
        assert_eq!(ind.sma200, 100.0);
        assert_eq!(ind.volatility, 0.0);
        assert_eq!(ind.risk_score, 0);
        assert_eq!(ind.current_price, 100.0);
    }

    #[test]
    fn descending_series_of_21() {
        let closes: Vec<f64> = (0..21).map(|i| 120.0 - i as f64).collect();
        let ind = compute_indicators(&series_of(&closes));
        assert!(ind.rsi.abs() < 1e-10);
        // Last 20 closes are 119..=100.
        assert!((ind.sma20 - 109.5).abs() < 1e-10);
        // Not enough bars: both long SMAs fall back to the last close.
        assert_eq!(ind.sma50, 100.0);
        assert_eq!(ind.sma200, 100.0);
        assert!((ind.volatility - 5.27).abs() < 1e-10);
        // 5.27 * 2 = 10.54, |(100 - 119) / 119| * 100 * 0.5 = 7.98 => 19
        assert_eq!(ind.risk_score, 19);
        assert_eq!(ind.current_price, 100.0);
    }

    #[test]
    fn long_series_fills_every_window() {
        let closes: Vec<f64> = (1..=250).map(|x| x as f64).collect();
        let ind = compute_indicators(&series_of(&closes));
        assert!((ind.sma20 - 240.5).abs() < 1e-10);
        assert!((ind.sma50 - 225.5).abs() < 1e-10);
        assert!((ind.sma200 - 150.5).abs() < 1e-10);
        assert_eq!(ind.rsi, 100.0);
        assert!(ind.current_price > ind.sma20);
        assert!(ind.risk_score <= 100);
    }

    #[test]
    fn custom_params_are_honoured() {
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let params = IndicatorParams {
            rsi_period: 5,
            volatility_period: 5,
            momentum_window: 5,
        };
        let ind = compute_indicators_with(&series_of(&closes), &params);
        assert_eq!(ind.rsi, 100.0);
        assert!(ind.volatility > 0.0);

        let default_ind = compute_indicators(&series_of(&closes));
        assert_eq!(default_ind.rsi, 50.0);
        assert_eq!(default_ind.volatility, 0.0);
    }

    #[test]
    fn params_deserialise_with_defaults() {
        let params: IndicatorParams = serde_json::from_str(r#"{ "rsi_period": 7 }"#).unwrap();
        assert_eq!(params.rsi_period, 7);
        assert_eq!(params.volatility_period, 20);
        assert_eq!(params.momentum_window, 20);
    }
}
