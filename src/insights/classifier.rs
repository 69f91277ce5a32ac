// =============================================================================
// Insight Classifier: indicators to categorical signals
// =============================================================================
//
// Decision tables (each evaluated top-down; first match wins):
//
//   RSI category    >= 80 extreme-overbought, >= 70 overbought, >= 50 neutral,
//                   >= 30 oversold, else extreme-oversold
//   Risk category   >= 70 very-risky, >= 50 risky, >= 30 market-comparable,
//                   else safer-than-market
//   Risk level      >= 70 very-high, >= 50 high, >= 30 medium, else low
//   Trend           price above SMA 20 & 50 & 200 strong-uptrend,
//                   20 & 50 uptrend, 20 short-term-up-long-term-caution,
//                   none downtrend, else mixed-signals
//   Main warning    rsi >= 80, rsi <= 20, risk >= 70, price below SMA 200 & 50
//   Main action     rsi >= 80, rsi <= 20 with risk < 50,
//                   price above SMA 20 & 50 with risk < 50
//
// "Above" is a strict comparison: a price equal to an average is not above it.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::categories::{
    MainAction, MainWarning, RiskCategory, RiskLevel, RsiCategory, TrendCategory,
};
use super::ladder::{Ladder, Rule, RuleTable};
use crate::indicators::TechnicalIndicators;

/// Categorical view of a `TechnicalIndicators` snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSignals {
    pub rsi_category: RsiCategory,
    pub risk_category: RiskCategory,
    pub trend_category: TrendCategory,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_warning: Option<MainWarning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_action: Option<MainAction>,
}

// =============================================================================
// Tables
// =============================================================================

pub const RSI_LADDER: Ladder<RsiCategory> = Ladder::new(
    &[
        (80.0, RsiCategory::ExtremeOverbought),
        (70.0, RsiCategory::Overbought),
        (50.0, RsiCategory::Neutral),
        (30.0, RsiCategory::Oversold),
    ],
    RsiCategory::ExtremeOversold,
);

pub const RISK_CATEGORY_LADDER: Ladder<RiskCategory> = Ladder::new(
    &[
        (70.0, RiskCategory::VeryRisky),
        (50.0, RiskCategory::Risky),
        (30.0, RiskCategory::MarketComparable),
    ],
    RiskCategory::SaferThanMarket,
);

/// Boundary scores (30, 50, 70) belong to the higher bucket.
pub const RISK_LEVEL_LADDER: Ladder<RiskLevel> = Ladder::new(
    &[
        (70.0, RiskLevel::VeryHigh),
        (50.0, RiskLevel::High),
        (30.0, RiskLevel::Medium),
    ],
    RiskLevel::Low,
);

/// Whether the current price sits strictly above each moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPosition {
    pub above20: bool,
    pub above50: bool,
    pub above200: bool,
}

impl TrendPosition {
    pub fn of(ind: &TechnicalIndicators) -> Self {
        Self {
            above20: ind.current_price > ind.sma20,
            above50: ind.current_price > ind.sma50,
            above200: ind.current_price > ind.sma200,
        }
    }
}

fn above_all(p: &TrendPosition) -> bool {
    p.above20 && p.above50 && p.above200
}

fn above_short_and_mid(p: &TrendPosition) -> bool {
    p.above20 && p.above50
}

fn above_short(p: &TrendPosition) -> bool {
    p.above20
}

fn below_all(p: &TrendPosition) -> bool {
    !p.above20 && !p.above50 && !p.above200
}

const TREND_RULES: &[(Rule<TrendPosition>, TrendCategory)] = &[
    (above_all, TrendCategory::StrongUptrend),
    (above_short_and_mid, TrendCategory::Uptrend),
    (above_short, TrendCategory::ShortTermUpLongTermCaution),
    (below_all, TrendCategory::Downtrend),
];

pub const TREND_TABLE: RuleTable<TrendPosition, TrendCategory> = RuleTable::new(TREND_RULES);

fn rsi_extreme_high(i: &TechnicalIndicators) -> bool {
    i.rsi >= 80.0
}

fn rsi_extreme_low(i: &TechnicalIndicators) -> bool {
    i.rsi <= 20.0
}

fn risk_very_high(i: &TechnicalIndicators) -> bool {
    i.risk_score >= 70
}

fn below_long_averages(i: &TechnicalIndicators) -> bool {
    i.current_price < i.sma200 && i.current_price < i.sma50
}

fn rsi_extreme_low_contained_risk(i: &TechnicalIndicators) -> bool {
    i.rsi <= 20.0 && i.risk_score < 50
}

fn rising_contained_risk(i: &TechnicalIndicators) -> bool {
    i.current_price > i.sma20 && i.current_price > i.sma50 && i.risk_score < 50
}

const WARNING_RULES: &[(Rule<TechnicalIndicators>, MainWarning)] = &[
    (rsi_extreme_high, MainWarning::OverboughtWarning),
    (rsi_extreme_low, MainWarning::OversoldWarning),
    (risk_very_high, MainWarning::HighRiskWarning),
    (below_long_averages, MainWarning::DowntrendWarning),
];

const ACTION_RULES: &[(Rule<TechnicalIndicators>, MainAction)] = &[
    (rsi_extreme_high, MainAction::ConsiderSell),
    (rsi_extreme_low_contained_risk, MainAction::BuyingOpportunity),
    (rising_contained_risk, MainAction::UptrendContinuation),
];

pub const WARNING_TABLE: RuleTable<TechnicalIndicators, MainWarning> = RuleTable::new(WARNING_RULES);

pub const ACTION_TABLE: RuleTable<TechnicalIndicators, MainAction> = RuleTable::new(ACTION_RULES);

// =============================================================================
// Classification
// =============================================================================

pub fn classify_rsi(rsi: f64) -> RsiCategory {
    RSI_LADDER.classify(rsi)
}

/// `volatility` is accepted alongside the score but does not move the
/// category.
pub fn classify_risk(risk_score: u8, _volatility: f64) -> RiskCategory {
    RISK_CATEGORY_LADDER.classify(f64::from(risk_score))
}

pub fn classify_trend(position: TrendPosition) -> TrendCategory {
    TREND_TABLE
        .first_match(&position)
        .unwrap_or(TrendCategory::MixedSignals)
}

pub fn risk_level(risk_score: u8) -> RiskLevel {
    RISK_LEVEL_LADDER.classify(f64::from(risk_score))
}

pub fn main_warning(ind: &TechnicalIndicators) -> Option<MainWarning> {
    WARNING_TABLE.first_match(ind)
}

pub fn main_action(ind: &TechnicalIndicators) -> Option<MainAction> {
    ACTION_TABLE.first_match(ind)
}

/// Map an indicator snapshot to its categorical signals. Pure and total.
pub fn classify(ind: &TechnicalIndicators) -> InsightSignals {
    InsightSignals {
        rsi_category: classify_rsi(ind.rsi),
        risk_category: classify_risk(ind.risk_score, ind.volatility),
        trend_category: classify_trend(TrendPosition::of(ind)),
        risk_level: risk_level(ind.risk_score),
        main_warning: main_warning(ind),
        main_action: main_action(ind),
    }
}
