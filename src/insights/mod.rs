// =============================================================================
// Insights Module
// =============================================================================
//
// Turns a `TechnicalIndicators` snapshot into categorical signals:
// - Enumerated tags (no natural-language text)
// - Ordered threshold ladders / rule tables, first match wins
// - Presenter trait for mapping tags to display strings

pub mod categories;
pub mod classifier;
pub mod ladder;
pub mod presenter;

pub use categories::{MainAction, MainWarning, RiskCategory, RiskLevel, RsiCategory, TrendCategory};
pub use classifier::{classify, InsightSignals, TrendPosition};
pub use presenter::{InsightPresenter, RenderedInsights, TagPresenter};
