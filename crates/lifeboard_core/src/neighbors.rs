//! Moore-neighbourhood counting with hard (non-wrapping) board edges.

use crate::grid::Grid;
use lifeboard_data::Cell;

/// `(row, col)` offsets of the eight surrounding cells.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),  // up
    (1, 0),   // down
    (0, 1),   // right
    (0, -1),  // left
    (-1, 1),  // up-right
    (-1, -1), // up-left
    (1, 1),   // down-right
    (1, -1),  // down-left
];

/// Cell at `(row + d_row, col + d_col)`, or `None` when that falls off the board.
#[inline]
pub fn neighbor(grid: &Grid, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Cell> {
    let r = row.checked_add_signed(d_row)?;
    let c = col.checked_add_signed(d_col)?;
    grid.get(r, c)
}

/// Number of live cells among the eight neighbours of `(row, col)`.
///
/// Off-board neighbours count as dead.
pub fn live_neighbor_count(grid: &Grid, row: usize, col: usize) -> u32 {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| neighbor(grid, row, col, dr, dc))
        .filter(|cell| cell.is_alive())
        .count() as u32
}
