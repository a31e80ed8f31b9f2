//! Generation loop and long-run classification.
//!
//! Each [`Simulation::step`] computes the next board from the current one,
//! compares it against the retained history and either records it and keeps
//! going (`Evolving`) or stops with a terminal state. A terminal simulation must
//! not be stepped again.

use crate::config::{validate_rules, validate_side_length, EngineConfig};
use crate::error::Result;
use crate::grid::Grid;
use crate::history::{History, DEFAULT_HISTORY_CAPACITY};
use crate::rules::advance;
use lifeboard_data::{RuleParameters, SimulationState};

/// Outcome of a single generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Generations advanced so far, including this one.
    pub iteration: u64,
    pub grid: Grid,
    pub state: SimulationState,
    pub population: usize,
}

/// What a finished (or cut short) run reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub state: SimulationState,
    pub iterations: u64,
    pub initial_grid: Grid,
    pub final_grid: Grid,
}

/// Classifies `next` (produced at `next_generation`) against `history`.
///
/// Checks extinction, then stasis against the newest entry, then scans the
/// older entries from newest to oldest so the smallest period wins.
pub fn classify(next: &Grid, next_generation: u64, history: &History) -> Result<SimulationState> {
    if next.count_live() == 0 {
        return Ok(SimulationState::Dead);
    }

    let snapshots = history.snapshots();
    let Some((newest, older)) = snapshots.split_last() else {
        return Ok(SimulationState::Evolving);
    };

    if next.equals(&newest.grid)? {
        return Ok(SimulationState::Static);
    }

    for snapshot in older.iter().rev() {
        if next.equals(&snapshot.grid)? {
            let period = next_generation.saturating_sub(snapshot.generation) as usize;
            return Ok(SimulationState::Periodic { period });
        }
    }

    Ok(SimulationState::Evolving)
}

#[derive(Debug, Clone)]
pub struct Simulation {
    rules: RuleParameters,
    initial: Grid,
    current: Grid,
    history: History,
    iteration: u64,
    state: SimulationState,
}

impl Simulation {
    /// Builds a randomly seeded board of `side_length` and records it as genesis.
    pub fn new(side_length: usize, rules: RuleParameters, seed: u64) -> Result<Self> {
        Self::with_capacity(side_length, rules, seed, DEFAULT_HISTORY_CAPACITY)
    }

    /// Builds a random board from engine configuration.
    pub fn from_config(config: &EngineConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Self::with_capacity(config.side_length, config.rules, seed, config.history_capacity)
    }

    fn with_capacity(
        side_length: usize,
        rules: RuleParameters,
        seed: u64,
        history_capacity: usize,
    ) -> Result<Self> {
        validate_side_length(side_length)?;
        let mut grid = Grid::new(side_length)?;
        grid.populate_random(seed);
        tracing::debug!(
            side_length,
            seed,
            population = grid.count_live(),
            "Seeded initial board"
        );
        Self::from_grid(grid, rules, history_capacity)
    }

    /// Starts from a prepared board instead of a random one.
    pub fn from_grid(genesis: Grid, rules: RuleParameters, history_capacity: usize) -> Result<Self> {
        validate_side_length(genesis.side_length())?;
        validate_rules(&rules)?;

        let history = History::with_genesis(&genesis, history_capacity)?;
        Ok(Self {
            rules,
            current: genesis.clone(),
            initial: genesis,
            history,
            iteration: 0,
            state: SimulationState::Evolving,
        })
    }

    /// Advances one generation.
    pub fn step(&mut self) -> Result<GenerationResult> {
        debug_assert!(
            !self.state.is_terminal(),
            "step() called on a terminal simulation"
        );

        let next = advance(&self.current, &self.rules)?;
        let generation = self.iteration + 1;
        let state = classify(&next, generation, &self.history)?;

        if !state.is_terminal() {
            self.history.append(generation, &next)?;
        }

        self.iteration = generation;
        self.state = state;
        self.current = next;

        let population = self.current.count_live();
        tracing::debug!(
            iteration = generation,
            population,
            state = state.label(),
            "Advanced generation"
        );
        if state.is_terminal() {
            tracing::info!(
                iteration = generation,
                state = state.label(),
                period = state.period(),
                "Simulation reached a terminal state"
            );
        }

        Ok(GenerationResult {
            iteration: generation,
            grid: self.current.clone(),
            state,
            population,
        })
    }

    /// Steps until a terminal state or until `max_iterations` generations have run.
    pub fn run<F>(&mut self, max_iterations: Option<u64>, mut on_generation: F) -> Result<RunSummary>
    where
        F: FnMut(&GenerationResult),
    {
        while !self.state.is_terminal() {
            if max_iterations.is_some_and(|limit| self.iteration >= limit) {
                break;
            }
            let result = self.step()?;
            on_generation(&result);
        }
        Ok(self.summary())
    }

    /// Snapshot of the run so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            state: self.state,
            iterations: self.iteration,
            initial_grid: self.initial.clone(),
            final_grid: self.current.clone(),
        }
    }

    /// Generations advanced so far.
    pub fn current_iteration(&self) -> u64 {
        self.iteration
    }

    /// The genesis board.
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// The board that ended the run; `None` while still evolving.
    pub fn final_grid(&self) -> Option<&Grid> {
        self.state.is_terminal().then_some(&self.current)
    }

    /// Most recent generation.
    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    /// Current classification.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Retained generations.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Rule the run was started with.
    pub fn rules(&self) -> &RuleParameters {
        &self.rules
    }
}
