// =============================================================================
// Risk Score: composite 0..=100 score from volatility and momentum
// =============================================================================
//
// Two independently capped components:
//   volatility component = min(volatility * 2, 70)
//   momentum component   = min(|pct change over the momentum window| * 0.5, 30)
//
// The momentum component only applies once the series fills the momentum
// window.  The sum is rounded half-up and capped to [0, 100].
// =============================================================================

use super::round_half_up;

/// Default momentum window (bars) used by the engine.
pub const DEFAULT_MOMENTUM_WINDOW: usize = 20;

const VOLATILITY_WEIGHT: f64 = 2.0;
const VOLATILITY_CAP: f64 = 70.0;
const MOMENTUM_WEIGHT: f64 = 0.5;
const MOMENTUM_CAP: f64 = 30.0;
const MAX_SCORE: f64 = 100.0;

/// Combine `volatility` (percent) and recent momentum of `closes` into an
/// integer score in `0..=100`.
pub fn calculate_risk_score(closes: &[f64], volatility: f64, momentum_window: usize) -> u8 {
    let volatility_risk = (volatility * VOLATILITY_WEIGHT).min(VOLATILITY_CAP);

    let momentum_risk = if momentum_window == 0 || closes.len() < momentum_window {
        0.0
    } else {
        let window = &closes[closes.len() - momentum_window..];
        momentum_component(window[0], window[window.len() - 1])
    };

    let total = round_half_up(volatility_risk + momentum_risk);
    if total.is_nan() {
        return 0;
    }
    total.clamp(0.0, MAX_SCORE) as u8
}

/// Half the absolute percent move from `first` to `last`, capped.
///
/// A move away from a zero `first` close is an unbounded change and takes
/// the full cap; zero to zero has no change and contributes 0.
fn momentum_component(first: f64, last: f64) -> f64 {
    let pct_change = (last - first) / first * 100.0;
    if pct_change.is_nan() {
        return 0.0;
    }
    (pct_change.abs() * MOMENTUM_WEIGHT).min(MOMENTUM_CAP)
}
