//! Plain data types shared by the Lifeboard engine and its front end.

pub mod data;

pub use data::cell::Cell;
pub use data::rules::RuleParameters;
pub use data::state::SimulationState;
