//! Fixed-size square board of cells.

use crate::error::{EngineError, Result};
use lifeboard_data::Cell;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Square board stored row-major; always holds exactly `side * side` cells.
///
/// Grids are value-like: snapshots are deep copies, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead board.
    pub fn new(side: usize) -> Result<Self> {
        let len = side
            .checked_mul(side)
            .ok_or_else(|| EngineError::allocation_failure(usize::MAX))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| EngineError::allocation_failure(len))?;
        cells.resize(len, Cell::Dead);
        Ok(Self { side, cells })
    }

    /// Creates a board with the listed `(row, col)` cells alive.
    pub fn with_live_cells(side: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(side)?;
        for &(row, col) in live {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Cells along one edge.
    pub fn side_length(&self) -> usize {
        self.side
    }

    /// Total cell count, `side * side`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.side && col < self.side {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.side || col >= self.side {
            return Err(EngineError::invalid_configuration(format!(
                "cell ({row}, {col}) is outside a {0}x{0} board",
                self.side
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Sets every cell to dead.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Overwrites every cell from `other`.
    pub fn copy_from(&mut self, other: &Grid) -> Result<()> {
        self.check_same_size(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Cell-wise equality with `other`.
    pub fn equals(&self, other: &Grid) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self.cells == other.cells)
    }

    fn check_same_size(&self, other: &Grid) -> Result<()> {
        if self.side != other.side {
            return Err(EngineError::size_mismatch(self.side, other.side));
        }
        Ok(())
    }

    /// Clears the board and scatters live cells deterministically from `seed`.
    ///
    /// Picks `k` in `[0, side²)` and then `k` positions with repetition, so the
    /// resulting population can be lower than `k`.
    pub fn populate_random(&mut self, seed: u64) {
        self.reset();
        let len = self.cells.len();
        if len == 0 {
            return;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let times = rng.gen_range(0..len);
        for _ in 0..times {
            let idx = rng.gen_range(0..len);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Number of live cells.
    pub fn count_live(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` valid for a zero-sided board.
        self.cells.chunks(self.side.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(5).unwrap();
        assert_eq!(grid.len(), 25);
        assert_eq!(grid.count_live(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(1, 2), Some(Cell::Alive));
        assert_eq!(grid.get(2, 1), Some(Cell::Dead));
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(3).unwrap();
        let err = grid.set(3, 0, Cell::Alive).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_reset() {
        let mut grid = Grid::with_live_cells(3, &[(0, 0), (1, 1), (2, 2)]).unwrap();
        assert_eq!(grid.count_live(), 3);
        grid.reset();
        assert_eq!(grid.count_live(), 0);
    }

    #[test]
    fn test_copy_from_then_equals() {
        let source = Grid::with_live_cells(4, &[(0, 1), (3, 3)]).unwrap();
        let mut target = Grid::new(4).unwrap();
        assert!(!target.equals(&source).unwrap());
        target.copy_from(&source).unwrap();
        assert!(target.equals(&source).unwrap());
    }

    #[test]
    fn test_size_mismatch() {
        let a = Grid::new(3).unwrap();
        let mut b = Grid::new(4).unwrap();
        assert_eq!(
            b.copy_from(&a).unwrap_err(),
            EngineError::SizeMismatch {
                expected: 4,
                found: 3
            }
        );
        assert!(a.equals(&b).is_err());
    }

    #[test]
    fn test_populate_random_deterministic() {
        let mut a = Grid::new(10).unwrap();
        let mut b = Grid::new(10).unwrap();
        a.populate_random(42);
        b.populate_random(42);
        assert!(a.equals(&b).unwrap());
        assert!(a.count_live() < 100);
    }

    #[test]
    fn test_populate_random_clears_first() {
        let mut grid = Grid::new(6).unwrap();
        grid.populate_random(7);
        let first = grid.clone();
        grid.set(0, 0, Cell::Alive).unwrap();
        grid.set(5, 5, Cell::Alive).unwrap();
        grid.populate_random(7);
        assert_eq!(grid, first);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_live_cells(2, &[(0, 0), (1, 1)]).unwrap();
        assert_eq!(grid.to_string(), "o \n o\n");
    }

    #[test]
    fn test_side_length_overflow_is_allocation_failure() {
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(EngineError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn test_unreservable_board_is_allocation_failure() {
        let side = 1usize << 31;
        assert!(matches!(
            Grid::new(side),
            Err(EngineError::AllocationFailure { .. })
        ));
    }
}
