// =============================================================================
// Stoxly Insights: technical indicators and categorical risk insights
// =============================================================================
//
// Pipeline:
//   PriceSeries -> compute_indicators -> TechnicalIndicators
//               -> classify           -> InsightSignals
//               -> InsightPresenter   -> display strings (consumer-supplied)
//
// Every step is a pure function of its input; nothing here performs I/O
// except `AnalysisConfig::load` / `save`.

pub mod analysis;
pub mod config;
pub mod indicators;
pub mod insights;
pub mod types;

pub use analysis::{analyze, AnalysisResult};
pub use config::AnalysisConfig;
pub use indicators::{compute_indicators, compute_indicators_with, IndicatorParams, TechnicalIndicators};
pub use insights::{classify, InsightPresenter, InsightSignals, RenderedInsights, TagPresenter};
pub use types::{AssetType, PriceBar, PriceSeries};
