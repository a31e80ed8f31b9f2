use serde::{Deserialize, Serialize};

/// Long-run classification of a simulation.
///
/// Every state except `Evolving` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimulationState {
    #[default]
    Evolving,
    /// No live cells remain.
    Dead,
    /// Identical to the previous generation.
    Static,
    /// Identical to an earlier, non-adjacent generation.
    Periodic { period: usize },
}

impl SimulationState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimulationState::Evolving)
    }

    /// Cycle length: 1 for `Static`, `p` for `Periodic`, `None` otherwise.
    #[must_use]
    pub fn period(&self) -> Option<usize> {
        match self {
            SimulationState::Static => Some(1),
            SimulationState::Periodic { period } => Some(*period),
            SimulationState::Evolving | SimulationState::Dead => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimulationState::Evolving => "evolving",
            SimulationState::Dead => "dead",
            SimulationState::Static => "static",
            SimulationState::Periodic { .. } => "periodic",
        }
    }
}
