// =============================================================================
// Presentation seam
// =============================================================================
//
// The classifier produces tags only.  Turning tags into sentences (in any
// language) is the job of an `InsightPresenter` supplied by the consumer.
// `TagPresenter` is the built-in implementation and renders the tags as-is.

use serde::{Deserialize, Serialize};

use super::categories::{
    MainAction, MainWarning, RiskCategory, RiskLevel, RsiCategory, TrendCategory,
};
use super::classifier::InsightSignals;

/// Signals rendered to display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedInsights {
    pub rsi_message: String,
    pub risk_message: String,
    pub trend_message: String,
    pub risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_action: Option<String>,
}

/// Lookup from classifier tags to display text.
pub trait InsightPresenter {
    fn rsi_message(&self, category: RsiCategory) -> String;

    fn risk_message(&self, category: RiskCategory) -> String;

    fn trend_message(&self, category: TrendCategory) -> String;

    fn risk_level_label(&self, level: RiskLevel) -> String;

    fn warning_message(&self, warning: MainWarning) -> String;

    fn action_message(&self, action: MainAction) -> String;

    fn render(&self, signals: &InsightSignals) -> RenderedInsights {
        RenderedInsights {
            rsi_message: self.rsi_message(signals.rsi_category),
            risk_message: self.risk_message(signals.risk_category),
            trend_message: self.trend_message(signals.trend_category),
            risk_level: self.risk_level_label(signals.risk_level),
            main_warning: signals.main_warning.map(|w| self.warning_message(w)),
            main_action: signals.main_action.map(|a| self.action_message(a)),
        }
    }
}

/// Renders every tag as its kebab-case identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagPresenter;

impl InsightPresenter for TagPresenter {
    fn rsi_message(&self, category: RsiCategory) -> String {
        category.to_string()
    }

    fn risk_message(&self, category: RiskCategory) -> String {
        category.to_string()
    }

    fn trend_message(&self, category: TrendCategory) -> String {
        category.to_string()
    }

    fn risk_level_label(&self, level: RiskLevel) -> String {
        level.to_string()
    }

    fn warning_message(&self, warning: MainWarning) -> String {
        warning.to_string()
    }

    fn action_message(&self, action: MainAction) -> String {
        action.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(main_warning: Option<MainWarning>) -> InsightSignals {
        InsightSignals {
            rsi_category: RsiCategory::Oversold,
            risk_category: RiskCategory::SaferThanMarket,
            trend_category: TrendCategory::Downtrend,
            risk_level: RiskLevel::Low,
            main_warning,
            main_action: None,
        }
    }

    #[test]
    fn tag_presenter_renders_tags() {
        let rendered = TagPresenter.render(&signals(Some(MainWarning::DowntrendWarning)));
        assert_eq!(rendered.rsi_message, "oversold");
        assert_eq!(rendered.risk_message, "safer-than-market");
        assert_eq!(rendered.trend_message, "downtrend");
        assert_eq!(rendered.risk_level, "low");
        assert_eq!(rendered.main_warning.as_deref(), Some("downtrend-warning"));
        assert_eq!(rendered.main_action, None);
    }

    /// A consumer-side presenter only has to fill in the lookups.
    struct Shouty;

    impl InsightPresenter for Shouty {
        fn rsi_message(&self, c: RsiCategory) -> String {
            c.as_tag().to_uppercase()
        }
        fn risk_message(&self, c: RiskCategory) -> String {
            c.as_tag().to_uppercase()
        }
        fn trend_message(&self, c: TrendCategory) -> String {
            c.as_tag().to_uppercase()
        }
        fn risk_level_label(&self, l: RiskLevel) -> String {
            l.as_tag().to_uppercase()
        }
        fn warning_message(&self, w: MainWarning) -> String {
            format!("{}!", w.as_tag().to_uppercase())
        }
        fn action_message(&self, a: MainAction) -> String {
            a.as_tag().to_uppercase()
        }
    }

    #[test]
    fn custom_presenter_plugs_in() {
        let rendered = Shouty.render(&signals(None));
        assert_eq!(rendered.trend_message, "DOWNTREND");
        assert_eq!(rendered.main_warning, None);

        let rendered = Shouty.render(&signals(Some(MainWarning::HighRiskWarning)));
        assert_eq!(rendered.main_warning.as_deref(), Some("HIGH-RISK-WARNING!"));
    }
}
