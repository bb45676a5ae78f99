//! Trades-to-target projection across trading-cadence scenarios.

use common::TradingStats;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Trades-per-day cadences projected in the scaling table.
pub const SCENARIO_TRADES_PER_DAY: [u32; 7] = [1, 2, 3, 5, 10, 20, 50];

const DAYS_PER_YEAR: Decimal = dec!(365);

/// How believable a scenario's time-to-target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Realism {
    Impossible,
    VeryHard,
    Hard,
    Possible,
    Feasible,
    Optimistic,
}

impl Realism {
    pub fn from_years(years: Decimal) -> Self {
        match years {
            y if y > dec!(50) => Realism::Impossible,
            y if y > dec!(20) => Realism::VeryHard,
            y if y > dec!(10) => Realism::Hard,
            y if y > dec!(5) => Realism::Possible,
            y if y > dec!(2) => Realism::Feasible,
            _ => Realism::Optimistic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Realism::Impossible => "IMPOSSÍVEL",
            Realism::VeryHard => "MUITO DIFÍCIL",
            Realism::Hard => "DIFÍCIL",
            Realism::Possible => "POSSÍVEL",
            Realism::Feasible => "VIÁVEL",
            Realism::Optimistic => "OTIMISTA",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Realism::Impossible => "❌",
            Realism::VeryHard | Realism::Hard => "⚠",
            Realism::Possible | Realism::Feasible => "✓",
            Realism::Optimistic => "🚀",
        }
    }
}

/// One trades-per-day cadence in the scaling table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingScenario {
    pub trades_per_day: u32,
    pub years: Decimal,
    pub realism: Realism,
}

/// Trade volume required to reach the capital target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// Exact (fractional) number of trades to the target
    pub trades_needed: Decimal,
    pub scenarios: Vec<ScalingScenario>,
}

impl GrowthProjection {
    pub fn from_stats(stats: &TradingStats) -> Self {
        let trades_needed = (stats.target - stats.current_capital) / stats.avg_profit;

        let scenarios = SCENARIO_TRADES_PER_DAY
            .iter()
            .map(|&tpd| {
                let years = trades_needed / Decimal::from(tpd) / DAYS_PER_YEAR;
                ScalingScenario {
                    trades_per_day: tpd,
                    years,
                    realism: Realism::from_years(years),
                }
            })
            .collect();

        Self {
            trades_needed,
            scenarios,
        }
    }

    /// Whole trades to the target, for display.
    pub fn trades_needed_floor(&self) -> u64 {
        self.trades_needed.floor().to_u64().unwrap_or(0)
    }
}
