use serde::{Deserialize, Serialize};
use std::fmt;

/// Birth/survival rule in `Bb/Sl-h` form.
///
/// A live cell survives when its live-neighbour count lies in the inclusive
/// band `survive_low..=survive_high`; a dead cell is born when the count is
/// exactly `born_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleParameters {
    pub survive_low: u32,
    pub survive_high: u32,
    pub born_count: u32,
}

impl Default for RuleParameters {
    fn default() -> Self {
        Self::conway()
    }
}

impl RuleParameters {
    pub fn new(survive_low: u32, survive_high: u32, born_count: u32) -> Self {
        Self {
            survive_low,
            survive_high,
            born_count,
        }
    }

    /// Classic B3/S23.
    pub fn conway() -> Self {
        Self::new(2, 3, 3)
    }

    #[must_use]
    pub fn survives(&self, live_neighbors: u32) -> bool {
        (self.survive_low..=self.survive_high).contains(&live_neighbors)
    }

    #[must_use]
    pub fn is_born(&self, live_neighbors: u32) -> bool {
        live_neighbors == self.born_count
    }
}

impl fmt::Display for RuleParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}/S{}-{}",
            self.born_count, self.survive_low, self.survive_high
        )
    }
}
