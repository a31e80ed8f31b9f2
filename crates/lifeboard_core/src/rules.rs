//! Birth/survival rule evaluation.

use crate::error::Result;
use crate::grid::Grid;
use crate::neighbors::live_neighbor_count;
pub use lifeboard_data::RuleParameters;
use lifeboard_data::Cell;

pub trait RuleLogic {
    /// State of a cell in the next generation given its live-neighbour count.
    fn next_cell(&self, cell: Cell, live_neighbors: u32) -> Cell;
}

impl RuleLogic for RuleParameters {
    fn next_cell(&self, cell: Cell, live_neighbors: u32) -> Cell {
        match cell {
            Cell::Alive => Cell::from(self.survives(live_neighbors)),
            Cell::Dead => Cell::from(self.is_born(live_neighbors)),
        }
    }
}

/// Computes the generation after `current`.
///
/// Neighbour counts always read `current`; the returned grid is only written.
pub fn advance<R: RuleLogic>(current: &Grid, rules: &R) -> Result<Grid> {
    tracing::debug!(side = current.side_length(), "advance");

    let side = current.side_length();
    let mut next = Grid::new(side)?;
    next.copy_from(current)?;

    for row in 0..side {
        for col in 0..side {
            let Some(cell) = current.get(row, col) else {
                continue;
            };
            let n = live_neighbor_count(current, row, col);
            let updated = rules.next_cell(cell, n);
            if updated != cell {
                next.set(row, col, updated)?;
            }
        }
    }

    Ok(next)
}
