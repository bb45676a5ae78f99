//! Per-trade edge and Kelly position sizing.

use common::TradingStats;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Edge metrics and optimal position sizing derived from the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeReport {
    /// Average win over average loss
    pub win_loss_ratio: Decimal,

    /// Expected profit per trade (USD)
    pub expectancy: Decimal,

    /// Win-weighted payoff over loss-weighted payoff
    pub profit_factor: Decimal,

    /// Kelly fraction of capital per trade
    pub kelly: Decimal,

    /// Half Kelly, the usual recommendation
    pub kelly_half: Decimal,

    /// Quarter Kelly, conservative
    pub kelly_quarter: Decimal,
}

impl EdgeReport {
    /// Kelly formula: (b·p − q) / b
    /// where:
    ///   b = payoff ratio (avg win over avg loss)
    ///   p = probability of winning
    ///   q = probability of losing (1 − p)
    pub fn from_stats(stats: &TradingStats) -> Self {
        let p = Decimal::from_f64(stats.win_rate).unwrap_or(Decimal::ZERO);
        let q = Decimal::from_f64(stats.loss_rate).unwrap_or(Decimal::ZERO);
        let b = stats.avg_profit / stats.avg_loss.abs();

        let expectancy = p * stats.avg_profit - q * stats.avg_loss;
        let profit_factor = (p / q) * b;

        let kelly = if b == Decimal::ZERO {
            Decimal::ZERO
        } else {
            (b * p - q) / b
        };

        Self {
            win_loss_ratio: b,
            expectancy,
            profit_factor,
            kelly,
            kelly_half: kelly / dec!(2),
            kelly_quarter: kelly / dec!(4),
        }
    }

    /// Kelly fraction as a percentage of capital, for display.
    pub fn kelly_pct(&self) -> Decimal {
        (self.kelly * dec!(100)).round_dp(1)
    }

    pub fn kelly_half_pct(&self) -> Decimal {
        (self.kelly_half * dec!(100)).round_dp(1)
    }

    pub fn kelly_quarter_pct(&self) -> Decimal {
        (self.kelly_quarter * dec!(100)).round_dp(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_of_the_historical_record() {
        let edge = EdgeReport::from_stats(&TradingStats::default());

        assert_eq!(edge.win_loss_ratio.round_dp(2), dec!(1.44));
        assert_eq!(edge.expectancy.round_dp(3), dec!(0.579));
        assert_eq!(edge.profit_factor.round_dp(2), dec!(6.22));
    }

    #[test]
    fn kelly_ladder() {
        let edge = EdgeReport::from_stats(&TradingStats::default());

        assert_eq!(edge.kelly_pct(), dec!(68.2));
        assert_eq!(edge.kelly_half_pct(), dec!(34.1));
        assert_eq!(edge.kelly_quarter_pct(), dec!(17.0));

        assert!(edge.kelly_quarter < edge.kelly_half);
        assert!(edge.kelly_half < edge.kelly);
    }

    #[test]
    fn positive_edge_keeps_kelly_in_range() {
        let edge = EdgeReport::from_stats(&TradingStats::default());

        assert!(edge.kelly > Decimal::ZERO);
        assert!(edge.kelly < Decimal::ONE);
        assert!(edge.expectancy > Decimal::ZERO);
    }

    #[test]
    fn coin_flip_with_even_payoff_has_no_edge() {
        let stats = TradingStats {
            win_rate: 0.5,
            loss_rate: 0.5,
            avg_profit: dec!(1.00),
            avg_loss: dec!(1.00),
            ..Default::default()
        };
        let edge = EdgeReport::from_stats(&stats);

        assert_eq!(edge.kelly, Decimal::ZERO);
        assert_eq!(edge.expectancy, Decimal::ZERO);
        assert_eq!(edge.profit_factor, Decimal::ONE);
    }
}
