// =============================================================================
// Insight tags: categorical outputs of the classifier
// =============================================================================
//
// Every tag serialises (and displays) as a fixed kebab-case identifier.  No
// natural-language text lives here; presenters map tags to messages.

use serde::{Deserialize, Serialize};

/// Generates `as_tag` and a `Display` impl that prints the tag.
macro_rules! tag_enum {
    ($name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $name {
            /// Stable kebab-case identifier, identical to the serde form.
            pub fn as_tag(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_tag())
            }
        }
    };
}

/// Where the RSI sits on the overbought / oversold scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RsiCategory {
    ExtremeOverbought,
    Overbought,
    Neutral,
    Oversold,
    ExtremeOversold,
}

tag_enum!(RsiCategory {
    ExtremeOverbought => "extreme-overbought",
    Overbought => "overbought",
    Neutral => "neutral",
    Oversold => "oversold",
    ExtremeOversold => "extreme-oversold",
});

/// Risk compared with the broad market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskCategory {
    VeryRisky,
    Risky,
    MarketComparable,
    SaferThanMarket,
}

tag_enum!(RiskCategory {
    VeryRisky => "very-risky",
    Risky => "risky",
    MarketComparable => "market-comparable",
    SaferThanMarket => "safer-than-market",
});

/// Price position relative to SMA(20/50/200).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendCategory {
    StrongUptrend,
    Uptrend,
    ShortTermUpLongTermCaution,
    Downtrend,
    MixedSignals,
}

tag_enum!(TrendCategory {
    StrongUptrend => "strong-uptrend",
    Uptrend => "uptrend",
    ShortTermUpLongTermCaution => "short-term-up-long-term-caution",
    Downtrend => "downtrend",
    MixedSignals => "mixed-signals",
});

/// Bucketed risk score used for presentation grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

tag_enum!(RiskLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
    VeryHigh => "very-high",
});

/// Headline warning, at most one per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainWarning {
    OverboughtWarning,
    OversoldWarning,
    HighRiskWarning,
    DowntrendWarning,
}

tag_enum!(MainWarning {
    OverboughtWarning => "overbought-warning",
    OversoldWarning => "oversold-warning",
    HighRiskWarning => "high-risk-warning",
    DowntrendWarning => "downtrend-warning",
});

/// Suggested action, at most one per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainAction {
    ConsiderSell,
    BuyingOpportunity,
    UptrendContinuation,
}

tag_enum!(MainAction {
    ConsiderSell => "consider-sell",
    BuyingOpportunity => "buying-opportunity",
    UptrendContinuation => "uptrend-continuation",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_tag() {
        let json = serde_json::to_string(&TrendCategory::ShortTermUpLongTermCaution).unwrap();
        assert_eq!(json, "\"short-term-up-long-term-caution\"");
        assert_eq!(
            TrendCategory::ShortTermUpLongTermCaution.to_string(),
            "short-term-up-long-term-caution"
        );

        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::VeryHigh] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn tags_parse_back() {
        let w: MainWarning = serde_json::from_str("\"downtrend-warning\"").unwrap();
        assert_eq!(w, MainWarning::DowntrendWarning);
        let a: MainAction = serde_json::from_str("\"buying-opportunity\"").unwrap();
        assert_eq!(a, MainAction::BuyingOpportunity);
    }

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::VeryHigh);
    }
}
