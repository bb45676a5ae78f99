use anyhow::{Context, Result};
use common::TradingStats;
use report::render_report;
use tracing::{info, Level};
use tracing_subscriber::fmt;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report.
    fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let stats = TradingStats::default();
    stats
        .validate()
        .context("historical record failed validation")?;

    info!(
        trades = stats.trades,
        win_rate = stats.win_rate,
        "compiling performance report"
    );

    print!("{}", render_report(&stats));

    info!("report complete");
    Ok(())
}
