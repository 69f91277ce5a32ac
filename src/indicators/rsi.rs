// =============================================================================
// Relative Strength Index (RSI): fixed-window simple averages
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1: Compute price changes (deltas) from consecutive closes.
// Step 2: Split them into gains (positive deltas) and losses (negated
//         negative deltas).
// Step 3: Take the most recent `period` gains / losses and average each with
//         a plain arithmetic mean.  No Wilder smoothing: the value is
//         recomputed from the latest window on every call.
// Step 4: RS  = avg_gain / avg_loss
//         RSI = 100 - 100 / (1 + RS), rounded to 2 decimals.
// =============================================================================

use super::round2;

/// Default look-back used by the engine.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI returned when there are not enough closes to fill the window.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Compute the RSI of the most recent `period` deltas of `closes`.
///
/// # Edge cases
/// - `period == 0` or `closes.len() <= period` => `NEUTRAL_RSI` (50.0)
/// - Average loss of exactly zero => 100.0, including the flat-market case
///   where the average gain is zero as well.
pub fn calculate_rsi(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() <= period {
        return NEUTRAL_RSI;
    }

    // Only the last `period` deltas contribute.
    let window = &closes[closes.len() - period - 1..];
    let (sum_gain, sum_loss) = window.windows(2).map(|w| w[1] - w[0]).fold(
        (0.0_f64, 0.0_f64),
        |(g, l), d| {
            if d > 0.0 {
                (g + d, l)
            } else if d < 0.0 {
                (g, l - d)
            } else {
                (g, l)
            }
        },
    );

    let period_f = period as f64;
    let avg_gain = sum_gain / period_f;
    let avg_loss = sum_loss / period_f;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    round2(100.0 - 100.0 / (1.0 + rs))
}
