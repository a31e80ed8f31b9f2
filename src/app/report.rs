//! End-of-run summary text.

use chrono::{DateTime, TimeZone};
use lifeboard_core::simulation::RunSummary;
use lifeboard_core::SimulationState;
use std::fmt::Display;

use crate::ui::renderer::BoardRenderer;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// One-line verdict for a final state.
pub fn status_line(state: SimulationState, iterations: u64) -> String {
    match state {
        SimulationState::Dead => format!("All life dead by {iterations} iterations"),
        SimulationState::Static => format!("All life in stasis by {iterations} iterations"),
        SimulationState::Periodic { period } => {
            format!("All life in periodicity of {period} by {iterations} iterations")
        }
        SimulationState::Evolving => format!("All life still evolving at {iterations}"),
    }
}

pub fn finished_at<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("finished at {}", now.format(TIMESTAMP_FORMAT))
}

/// Full summary: timestamp, verdict, then the initial and final boards.
pub fn render_report<Tz>(summary: &RunSummary, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let renderer = BoardRenderer::new();
    let mut out = String::new();
    out.push_str(&finished_at(now));
    out.push('\n');
    out.push_str(&status_line(summary.state, summary.iterations));
    out.push('\n');
    out.push_str("\ninitial board:\n");
    out.push_str(&renderer.render_board(&summary.initial_grid));
    out.push_str("\nfinal board:\n");
    out.push_str(&renderer.render_board(&summary.final_grid));
    out
}
