// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the trailing `period` closes.  When the series is shorter
// than the window the latest close stands in for the average; a partial-window
// mean is never reported.

use super::round2;

/// Mean of the last `period` closes, rounded to 2 decimals.
///
/// # Edge cases
/// - `closes.len() < period` => latest close, or 0.0 for an empty slice
/// - `period == 0` => treated like an unfilled window (latest close or 0.0)
pub fn calculate_sma(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return closes.last().copied().unwrap_or(0.0);
    }

    let window = &closes[closes.len() - period..];
    round2(window.iter().sum::<f64>() / period as f64)
}
