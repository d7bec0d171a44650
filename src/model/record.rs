// src/model/record.rs

use serde::Serialize;

/// Rounds monetary values and percentages the way they go over the wire.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One simulated day, immutable once appended to the history.
// Serialize so the serving layer and the CSV exporter share one shape.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    /// 1-based day index.
    pub day: usize,
    /// Price we charged. 0.0 on stockout days.
    pub user_price: f64,
    /// Competitor's quote. 0.0 on stockout days.
    pub competitor_price: f64,
    /// Percentage of that day's generated demand we captured.
    pub market_share: f64,
    pub items_sold: u32,
    /// Inventory remaining at end of day.
    pub stock_level: u32,
    /// Running profit through this day.
    pub cumulative_profit: f64,
    /// Qualitative note on the day's pricing posture.
    pub insight: Insight,
}

impl DayRecord {
    /// The all-zero record emitted for every day after a stockout.
    pub fn stockout(day: usize, cumulative_profit: f64) -> Self {
        Self {
            day,
            user_price: 0.0,
            competitor_price: 0.0,
            market_share: 0.0,
            items_sold: 0,
            stock_level: 0,
            cumulative_profit: round2(cumulative_profit),
            insight: Insight::OutOfStock,
        }
    }
}

/// Coarse classification of what the optimizer did on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    /// No inventory left; the day is a no-op.
    OutOfStock,
    /// Competitor ran a flash sale and we priced into it.
    FlashSaleResponse,
    /// We priced below the competitor.
    UndercutCompetitor,
    /// We held a price above the competitor's quote.
    PremiumHold,
    /// We matched the competitor (within a cent).
    MatchedCompetitor,
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Insight::OutOfStock => "out of stock",
            Insight::FlashSaleResponse => "flash sale response",
            Insight::UndercutCompetitor => "undercut competitor",
            Insight::PremiumHold => "premium hold",
            Insight::MatchedCompetitor => "matched competitor",
        };
        write!(f, "{}", label)
    }
}

/// Run-level aggregates, derived once from the full history.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_profit: f64,
    pub total_units_sold: u32,
    /// Mean of our price over days with a positive price (stockouts excluded).
    pub avg_user_price: f64,
    /// Mean competitor quote over days with a positive quote.
    pub avg_competitor_price: f64,
}

/// Everything a caller gets back from one run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub history: Vec<DayRecord>,
    pub summary: Summary,
}
