//! Error types for the simulation engine.
//!
//! Every variant is fatal to the run that raised it: the engine never retries
//! or degrades, it reports and the caller ends the simulation.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bad side length, rule parameters or history capacity
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Grid or history storage could not be obtained
    #[error("Allocation failure: could not reserve storage for {cells} cells")]
    AllocationFailure { cells: usize },

    /// Copy or comparison between grids of different side lengths
    #[error("Size mismatch: expected side length {expected}, found {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a new allocation failure error for `cells` cells.
    #[must_use]
    pub fn allocation_failure(cells: usize) -> Self {
        Self::AllocationFailure { cells }
    }

    /// Creates a new size mismatch error.
    #[must_use]
    pub fn size_mismatch(expected: usize, found: usize) -> Self {
        Self::SizeMismatch { expected, found }
    }
}
