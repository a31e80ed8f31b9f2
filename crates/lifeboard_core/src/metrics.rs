//! Run statistics and logging setup.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Generations between progress log lines.
const PROGRESS_INTERVAL: u64 = 100;

/// Statistics collected while a simulation runs.
pub struct Metrics {
    generations: u64,
    population: usize,
    peak_population: usize,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: 0,
            population: 0,
            peak_population: 0,
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation and its live population.
    pub fn record_generation(&mut self, iteration: u64, population: usize) {
        self.generations = iteration;
        self.population = population;
        self.peak_population = self.peak_population.max(population);

        if iteration % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                iteration,
                population,
                peak_population = self.peak_population,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn peak_population(&self) -> usize {
        self.peak_population
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with the board on stdout.
/// `RUST_LOG` takes precedence over the `debug` switch.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
