//! Consecutive-loss probabilities and expected worst streaks.

use serde::{Deserialize, Serialize};

/// Trade-count horizons for the expected-worst-streak estimate.
pub const STREAK_HORIZONS: [u32; 3] = [100, 1_000, 10_000];

/// Longest run length covered by the probability table.
pub const MAX_TABULATED_RUN: u32 = 10;

/// One row of the loss-streak probability table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossStreakRow {
    pub run_length: u32,

    /// Probability of this many consecutive losses, as a fraction
    pub probability: f64,

    /// Expected occurrences of the run over 100 trades
    pub expected_in_100: f64,

    /// Expected occurrences of the run over 1000 trades
    pub expected_in_1000: f64,
}

/// Loss-streak exposure implied by the bot's loss rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakReport {
    pub rows: Vec<LossStreakRow>,

    /// (horizon, expected worst streak) pairs
    pub expected_max: Vec<(u32, f64)>,
}

impl StreakReport {
    pub fn from_loss_rate(loss_rate: f64) -> Self {
        let rows = (1..=MAX_TABULATED_RUN)
            .map(|n| {
                let probability = loss_rate.powi(n as i32);
                LossStreakRow {
                    run_length: n,
                    probability,
                    expected_in_100: probability * 100.0,
                    expected_in_1000: probability * 1000.0,
                }
            })
            .collect();

        // The run length whose expected occurrence count over the horizon
        // is one: ln(N) / ln(1/q).
        let expected_max = STREAK_HORIZONS
            .iter()
            .map(|&horizon| {
                let streak = (horizon as f64).ln() / (1.0 / loss_rate).ln();
                (horizon, streak)
            })
            .collect();

        Self { rows, expected_max }
    }
}
