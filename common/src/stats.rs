//! The bot's historical track record.

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Aggregate results over the bot's closed trades.
///
/// All fields are fixed at construction; the whole report is a pure
/// function of this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingStats {
    /// Fraction of trades closed at a profit
    pub win_rate: f64,

    /// Fraction of trades closed at a loss
    pub loss_rate: f64,

    /// Number of closed trades in the sample
    pub trades: u32,

    /// Average net profit per trade (USD)
    pub avg_profit: Decimal,

    /// Average loss per losing trade (USD)
    pub avg_loss: Decimal,

    /// Net profit over the whole sample (USD)
    pub total_profit: Decimal,

    /// Account equity at the end of the sample (USD)
    pub current_capital: Decimal,

    /// Equity milestone used by the growth projection (USD)
    pub target: Decimal,
}

impl Default for TradingStats {
    fn default() -> Self {
        Self {
            win_rate: 0.812,
            loss_rate: 0.188,
            trades: 49,
            avg_profit: dec!(0.85),
            avg_loss: dec!(0.59),
            total_profit: dec!(25.46),
            current_capital: dec!(1025.46),
            target: dec!(1000000),
        }
    }
}

impl TradingStats {
    /// Win and loss rates must partition the sample.
    pub fn validate(&self) -> Result<()> {
        if (self.win_rate + self.loss_rate - 1.0).abs() > f64::EPSILON {
            bail!(
                "win rate {} and loss rate {} do not sum to 1.0",
                self.win_rate,
                self.loss_rate
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_valid() {
        let stats = TradingStats::default();
        assert!(stats.validate().is_ok());
        assert_eq!(stats.trades, 49);
        assert_eq!(stats.avg_profit, dec!(0.85));
    }

    #[test]
    fn mismatched_rates_are_rejected() {
        let stats = TradingStats {
            win_rate: 0.9,
            ..Default::default()
        };
        assert!(stats.validate().is_err());
    }
}
