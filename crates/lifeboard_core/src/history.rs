//! Bounded record of past generations used for stasis and cycle detection.
//!
//! The history always starts with the genesis board. When it fills up it
//! collapses to `[genesis, newest]` instead of sliding: cycles longer than the
//! capacity are only caught against genesis after a collapse.

use crate::error::{EngineError, Result};
use crate::grid::Grid;

/// Snapshots retained before a collapse.
pub const DEFAULT_HISTORY_CAPACITY: usize = 128;
/// Genesis plus one newest entry.
pub const MIN_HISTORY_CAPACITY: usize = 2;

/// A retained generation and the iteration that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub grid: Grid,
}

#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    snapshots: Vec<Snapshot>,
    collapses: u64,
}

impl History {
    /// Starts a history holding a copy of `genesis` as generation 0.
    pub fn with_genesis(genesis: &Grid, capacity: usize) -> Result<Self> {
        if capacity < MIN_HISTORY_CAPACITY {
            return Err(EngineError::invalid_configuration(format!(
                "history capacity {capacity} is below {MIN_HISTORY_CAPACITY}"
            )));
        }

        let mut snapshots = Vec::new();
        snapshots
            .try_reserve_exact(capacity)
            .map_err(|_| EngineError::allocation_failure(capacity.saturating_mul(genesis.len())))?;
        snapshots.push(Snapshot {
            generation: 0,
            grid: copy_of(genesis)?,
        });

        Ok(Self {
            capacity,
            snapshots,
            collapses: 0,
        })
    }

    /// Appends a deep copy of `grid` as the newest entry.
    pub fn append(&mut self, generation: u64, grid: &Grid) -> Result<()> {
        let snapshot = Snapshot {
            generation,
            grid: copy_of(grid)?,
        };

        if self.snapshots.len() >= self.capacity {
            self.collapse();
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drops everything but genesis.
    fn collapse(&mut self) {
        tracing::debug!(
            capacity = self.capacity,
            discarded = self.snapshots.len() - 1,
            "History full, collapsing to genesis"
        );
        self.snapshots.truncate(1);
        self.collapses += 1;
    }

    /// Retained grids, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Grid> + ExactSizeIterator {
        self.snapshots.iter().map(|s| &s.grid)
    }

    /// Retained snapshots with their generation numbers, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The starting board, kept through every collapse.
    pub fn genesis(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    /// Most recently appended snapshot.
    pub fn newest(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Entries held before the next append collapses.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the history has collapsed to genesis.
    pub fn collapses(&self) -> u64 {
        self.collapses
    }
}

fn copy_of(grid: &Grid) -> Result<Grid> {
    let mut copy = Grid::new(grid.side_length())?;
    copy.copy_from(grid)?;
    Ok(copy)
}
