use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::report::render_report;
use crate::model::config::AppConfig;
use crate::model::metrics::Metrics;
use crate::model::simulation::{RunSummary, Simulation};
use crate::ui::renderer::BoardRenderer;

pub const DEFAULT_CONFIG_PATH: &str = "lifeboard.toml";

pub struct App {
    pub simulation: Simulation,
    pub config: AppConfig,
    pub metrics: Metrics,
    pub seed: u64,
    renderer: BoardRenderer,
}

impl App {
    /// Reads `path`, or `lifeboard.toml` when it exists, falling back to defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        let config = AppConfig::from_toml(&content)
            .with_context(|| format!("parsing {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let seed = config
            .engine
            .seed
            .unwrap_or_else(|| u64::from(std::process::id()));
        let simulation = Simulation::from_config(&config.engine, seed)?;

        tracing::info!(
            side_length = config.engine.side_length,
            rules = %simulation.rules(),
            seed,
            "Starting simulation"
        );

        Ok(Self {
            simulation,
            config,
            metrics: Metrics::new(),
            seed,
            renderer: BoardRenderer::new(),
        })
    }

    /// Runs to a terminal state (or the iteration limit), printing each
    /// generation unless quiet and the summary at the end.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let delay = self.config.display.delay();
        let quiet = self.config.display.quiet;

        loop {
            if !quiet {
                let frame = self.renderer.render_generation(
                    self.simulation.current_iteration(),
                    self.simulation.current_grid(),
                );
                out.write_all(frame.as_bytes())?;
                out.flush()?;
            }

            if self
                .config
                .max_iterations
                .is_some_and(|limit| self.simulation.current_iteration() >= limit)
            {
                tracing::info!(
                    iterations = self.simulation.current_iteration(),
                    "Iteration limit reached"
                );
                break;
            }

            let result = self.simulation.step()?;
            self.metrics
                .record_generation(result.iteration, result.population);

            if result.state.is_terminal() {
                break;
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        let summary = self.simulation.summary();
        let report = render_report(&summary, &chrono::Local::now());
        out.write_all(report.as_bytes())?;
        out.flush()?;

        tracing::debug!(
            generations = self.metrics.generations(),
            peak_population = self.metrics.peak_population(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Run finished"
        );
        Ok(summary)
    }
}
