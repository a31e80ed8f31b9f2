//! Core data structures for the Lifeboard simulation.

pub mod cell;
pub mod rules;
pub mod state;
