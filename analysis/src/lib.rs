//! Performance analysis engines.
//!
//! Pure calculators over the bot's historical record: sampling statistics
//! of the observed win rate, consecutive-loss probabilities, growth
//! trajectory scenarios, and Kelly/edge sizing. No I/O happens here; the
//! `report` crate turns these results into text.

mod growth;
mod kelly;
mod significance;
mod streaks;

pub use growth::{GrowthProjection, Realism, ScalingScenario, SCENARIO_TRADES_PER_DAY};
pub use kelly::EdgeReport;
pub use significance::SignificanceReport;
pub use streaks::{LossStreakRow, StreakReport, MAX_TABULATED_RUN, STREAK_HORIZONS};
