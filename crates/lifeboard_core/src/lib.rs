//! # Lifeboard Core
//!
//! The simulation engine for Lifeboard, a generalised Game of Life on a small
//! square board with hard edges.
//!
//! This crate contains the deterministic simulation logic:
//! - Fixed-size grids and seeded random population
//! - Moore-neighbourhood counting without wraparound
//! - Configurable birth/survival rules (`Bb/Sl-h`)
//! - A bounded generation history that collapses to genesis when full
//! - Classification of a run as dead, static, periodic or evolving
//!
//! ## Example
//!
//! ```
//! use lifeboard_core::grid::Grid;
//! use lifeboard_core::simulation::Simulation;
//! use lifeboard_core::{RuleParameters, SimulationState};
//!
//! // A blinker flips between vertical and horizontal.
//! let blinker = Grid::with_live_cells(5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
//! let mut sim = Simulation::from_grid(blinker, RuleParameters::conway(), 128).unwrap();
//!
//! let summary = sim.run(None, |_| {}).unwrap();
//! assert_eq!(summary.state, SimulationState::Periodic { period: 2 });
//! assert_eq!(summary.iterations, 2);
//! ```

/// Run configuration and validation
pub mod config;
/// Engine error types
pub mod error;
/// Square cell board
pub mod grid;
/// Bounded history of past generations
pub mod history;
/// Run statistics and logging setup
pub mod metrics;
/// Neighbour counting
pub mod neighbors;
/// Birth/survival rule evaluation
pub mod rules;
/// Generation loop and classifier
pub mod simulation;

pub use error::{EngineError, Result};
pub use grid::Grid;
pub use history::History;
pub use lifeboard_data::{Cell, RuleParameters, SimulationState};
pub use metrics::{init_logging, Metrics};
pub use rules::RuleLogic;
pub use simulation::{GenerationResult, RunSummary, Simulation};
