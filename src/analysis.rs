// =============================================================================
// Analysis pipeline
// =============================================================================
//
// PriceSeries -> TechnicalIndicators -> InsightSignals, bundled with the
// instrument details from the configuration.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AnalysisConfig;
use crate::indicators::{compute_indicators_with, TechnicalIndicators};
use crate::insights::{classify, InsightSignals};
use crate::types::{AssetType, PriceSeries};

/// Full outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    pub asset_type: AssetType,
    pub indicators: TechnicalIndicators,
    pub signals: InsightSignals,
}

impl AnalysisResult {
    /// Quote currency of `indicators.current_price` and the averages.
    pub fn currency_code(&self) -> &'static str {
        self.asset_type.currency_code()
    }
}

/// Run the indicator engine and the classifier over `series`.
pub fn analyze(series: &PriceSeries, config: &AnalysisConfig) -> AnalysisResult {
    let indicators = compute_indicators_with(series, &config.indicators);
    let signals = classify(&indicators);

    info!(
        ticker = config.ticker.as_deref().unwrap_or("-"),
        bars = series.len(),
        risk_score = indicators.risk_score,
        risk_level = %signals.risk_level,
        trend = %signals.trend_category,
        warning = ?signals.main_warning,
        action = ?signals.main_action,
        "analysis complete"
    );

    AnalysisResult {
        ticker: config.ticker.clone(),
        asset_type: config.asset_type,
        indicators,
        signals,
    }
}
