//! Derived market analysis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the top-movers ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub name: String,
    /// 24h change in percent
    pub change: f64,
}

/// Overall market direction derived from the average 24h change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketMood {
    Bullish,
    Bearish,
    Steady,
}

impl MarketMood {
    /// Classify an average 24h change: at or above +0.5% is bullish,
    /// at or below -0.5% is bearish, anything between is steady
    pub fn from_average(average_change: f64) -> Self {
        if average_change >= 0.5 {
            MarketMood::Bullish
        } else if average_change <= -0.5 {
            MarketMood::Bearish
        } else {
            MarketMood::Steady
        }
    }

    /// Headline shown on the overview page
    pub fn headline(&self) -> &'static str {
        match self {
            MarketMood::Bullish => "O mercado está em alta! Fique atento às oportunidades.",
            MarketMood::Bearish => "Atenção! O mercado está retraindo hoje.",
            MarketMood::Steady => "Mercado está relativamente estável no momento.",
        }
    }
}

/// Derived summary of one snapshot
///
/// Recomputed from the current snapshot on every render cycle; never cached
/// independently of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub best_coin: String,
    pub best_change: f64,
    pub worst_coin: String,
    pub worst_change: f64,
    pub average_change: f64,
    /// Up to three highest 24h changes, descending
    pub top_movers: Vec<TopMover>,
    /// Count of coins with strictly positive 24h change
    pub coins_up: usize,
    /// Count of coins with strictly negative 24h change
    pub coins_down: usize,
    pub mood: MarketMood,
    /// Wall-clock time of computation, not of data fetch
    pub generated_at: DateTime<Utc>,
}

impl AnalysisSummary {
    /// Whole minutes since the summary was computed, for the
    /// "Atualizado há X minutos" caption
    pub fn age_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.generated_at).num_minutes().max(0)
    }
}
