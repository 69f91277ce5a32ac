// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators behind the insight
// pipeline.  Every function is total: insufficient data yields a documented
// fallback value instead of an error, so callers always get a number back.

pub mod engine;
pub mod risk_score;
pub mod rsi;
pub mod sma;
pub mod volatility;

pub use engine::{compute_indicators, compute_indicators_with, IndicatorParams, TechnicalIndicators};

/// Round to two decimals, half-up on the x100 value.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Round to the nearest integer, half-up.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
