//! Renders the bot's performance report.
//!
//! Section builders append formatted lines to a `String`; `render_report`
//! assembles them in the report's fixed top-to-bottom order. Rendering is
//! a pure function of the historical record, so the output is identical
//! on every run.

mod format;
pub mod narrative;
mod sections;

pub use sections::render_report;
