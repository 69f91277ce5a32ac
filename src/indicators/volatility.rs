// =============================================================================
// Volatility: coefficient of variation over a trailing window
// =============================================================================
//
// volatility = σ / mean * 100, where σ is the population standard deviation
// (divide by `period`, not `period - 1`) of the last `period` closes.  Not
// annualised.  Same band maths as the Bollinger middle / σ pair.

use super::round2;

/// Default window used by the engine.
pub const DEFAULT_VOLATILITY_PERIOD: usize = 20;

/// Volatility of the last `period` closes as a percentage, rounded to 2
/// decimals.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period` => 0.0
/// - Window mean of zero (e.g. all-zero prices) => 0.0
/// - Non-finite result => 0.0
pub fn calculate_volatility(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return 0.0;
    }

    let window = &closes[closes.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;

    if mean == 0.0 {
        return 0.0;
    }

    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
    let volatility = variance.sqrt() / mean * 100.0;

    if volatility.is_finite() {
        round2(volatility)
    } else {
        0.0
    }
}
