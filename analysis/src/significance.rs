//! Sampling statistics of the observed win rate.

use common::TradingStats;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided confidence level of the reported interval.
const CONFIDENCE_LEVEL: f64 = 0.95;

/// How far the observed win rate can be trusted given the sample size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignificanceReport {
    pub trades: u32,

    /// Observed win rate, as a fraction
    pub win_rate: f64,

    /// Standard deviation of the win count, in trades
    pub std_dev: f64,

    /// Standard deviation as a percentage of the sample size
    pub std_dev_pct: f64,

    /// Lower bound of the confidence interval, as a fraction
    pub ci_lower: f64,

    /// Upper bound of the confidence interval, as a fraction
    pub ci_upper: f64,
}

impl SignificanceReport {
    /// Derives the sampling statistics from the historical record.
    ///
    /// The interval is `p ± z·σ/n` with `σ = sqrt(n·p·(1−p))`; the σ/n
    /// term is the standard error of the per-trade win indicator.
    pub fn from_stats(stats: &TradingStats) -> Self {
        let n = stats.trades as f64;
        let p = stats.win_rate;

        let std_dev = (n * p * (1.0 - p)).sqrt();
        let std_dev_pct = std_dev / n * 100.0;

        let normal = Normal::new(0.0, 1.0).unwrap();
        let z = normal.inverse_cdf(0.5 + CONFIDENCE_LEVEL / 2.0);
        let half_width = z * std_dev / n;

        Self {
            trades: stats.trades,
            win_rate: p,
            std_dev,
            std_dev_pct,
            ci_lower: p - half_width,
            ci_upper: p + half_width,
        }
    }
}
