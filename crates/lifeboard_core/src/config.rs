//! Configuration for a simulation run.
//!
//! Values are layered: hardcoded defaults, then an optional `lifeboard.toml`,
//! then command-line flags applied by the binary.
//!
//! ## Example `lifeboard.toml`
//!
//! ```toml
//! max_iterations = 500
//!
//! [engine]
//! side_length = 20
//! seed = 42
//! history_capacity = 128
//!
//! [engine.rules]
//! survive_low = 2
//! survive_high = 3
//! born_count = 3
//!
//! [display]
//! delay_secs = 1
//! quiet = false
//! debug = false
//! ```

use crate::error::{EngineError, Result};
use crate::history::{DEFAULT_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY};
use lifeboard_data::RuleParameters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_SIDE_LENGTH: usize = 2;
pub const MAX_SIDE_LENGTH: usize = 99;
/// Largest live-neighbour count a Moore neighbourhood can produce.
pub const MAX_NEIGHBORS: u32 = 8;

/// Parameters the engine itself consumes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub side_length: usize,
    /// RNG seed for the initial board. `None` lets the caller pick one.
    pub seed: Option<u64>,
    pub history_capacity: usize,
    pub rules: RuleParameters,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side_length: 20,
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            rules: RuleParameters::conway(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        validate_side_length(self.side_length)?;
        validate_rules(&self.rules)?;
        if self.history_capacity < MIN_HISTORY_CAPACITY {
            return Err(EngineError::invalid_configuration(format!(
                "history capacity {} is below {MIN_HISTORY_CAPACITY}",
                self.history_capacity
            )));
        }
        Ok(())
    }
}

/// Presentation settings for the front end. The engine never reads these.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pause between generations, in seconds.
    pub delay_secs: u64,
    pub quiet: bool,
    pub debug: bool,
}

impl DisplayConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Stop after this many generations even if the board is still evolving.
    pub max_iterations: Option<u64>,
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.engine.validate()?;
        anyhow::ensure!(
            self.max_iterations != Some(0),
            "max_iterations must be positive when set"
        );
        Ok(())
    }
}

pub fn validate_side_length(side_length: usize) -> Result<()> {
    if !(MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side_length) {
        return Err(EngineError::invalid_configuration(format!(
            "side length {side_length} must be between {MIN_SIDE_LENGTH} and {MAX_SIDE_LENGTH}"
        )));
    }
    Ok(())
}

/// Rejects counts no neighbourhood can reach. An inverted survival band
/// (`survive_low > survive_high`) is allowed and means nothing survives.
pub fn validate_rules(rules: &RuleParameters) -> Result<()> {
    for (name, value) in [
        ("survive_low", rules.survive_low),
        ("survive_high", rules.survive_high),
        ("born_count", rules.born_count),
    ] {
        if value > MAX_NEIGHBORS {
            return Err(EngineError::invalid_configuration(format!(
                "{name} = {value} exceeds the {MAX_NEIGHBORS} neighbours of a cell"
            )));
        }
    }
    Ok(())
}
