use anyhow::Result;
use clap::Parser;
use lifeboard_lib::app::App;
use lifeboard_lib::model::config::AppConfig;
use lifeboard_lib::model::metrics::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Length of the square board (2-99)
    #[arg(short = 'n', long = "size")]
    size: Option<usize>,

    /// Born number in the BnSlh rule
    #[arg(short, long)]
    born: Option<u32>,

    /// Low survival number in the BnSlh rule
    #[arg(short, long)]
    low: Option<u32>,

    /// High survival number in the BnSlh rule
    #[arg(short = 'h', long)]
    high: Option<u32>,

    /// Seconds to sleep between generations
    #[arg(short, long)]
    sleep: Option<u64>,

    /// Quiet mode: only print the final summary
    #[arg(short, long)]
    quiet: bool,

    /// Debug mode: log engine entry points
    #[arg(short, long)]
    debug: bool,

    /// Seed for the initial board (defaults to the process id)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long)]
    max_iterations: Option<u64>,

    /// Custom config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// Command-line flags win over the config file.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(size) = self.size {
            config.engine.side_length = size;
        }
        if let Some(born) = self.born {
            config.engine.rules.born_count = born;
        }
        if let Some(low) = self.low {
            config.engine.rules.survive_low = low;
        }
        if let Some(high) = self.high {
            config.engine.rules.survive_high = high;
        }
        if let Some(sleep) = self.sleep {
            config.display.delay_secs = sleep;
        }
        if self.seed.is_some() {
            config.engine.seed = self.seed;
        }
        if self.max_iterations.is_some() {
            config.max_iterations = self.max_iterations;
        }
        config.display.quiet |= self.quiet;
        config.display.debug |= self.debug;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = App::load_config(args.config.as_deref())?;
    args.apply(&mut config);
    init_logging(config.display.debug);

    let mut app = App::new(config)?;
    let mut stdout = std::io::stdout();
    app.run(&mut stdout).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> AppConfig {
        AppConfig::from_toml(
            r#"
            max_iterations = 50

            [engine]
            side_length = 12
            seed = 3

            [engine.rules]
            survive_low = 3
            survive_high = 4
            born_count = 2

            [display]
            delay_secs = 2
            quiet = true
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_flags_override_file_values() {
        let args = Args::try_parse_from([
            "lifeboard", "-n", "7", "-b", "3", "-l", "2", "-h", "5", "-s", "0", "--seed", "9",
            "-m", "10",
        ])
        .unwrap();
        let mut config = file_config();
        args.apply(&mut config);

        assert_eq!(config.engine.side_length, 7);
        assert_eq!(config.engine.rules.born_count, 3);
        assert_eq!(config.engine.rules.survive_low, 2);
        assert_eq!(config.engine.rules.survive_high, 5);
        assert_eq!(config.engine.seed, Some(9));
        assert_eq!(config.display.delay_secs, 0);
        assert_eq!(config.max_iterations, Some(10));
    }

    #[test]
    fn test_absent_flags_keep_file_values() {
        let args = Args::try_parse_from(["lifeboard"]).unwrap();
        let mut config = file_config();
        args.apply(&mut config);
        assert_eq!(config, file_config());
    }

    #[test]
    fn test_switches_only_turn_on() {
        let args = Args::try_parse_from(["lifeboard", "-d"]).unwrap();
        let mut config = file_config();
        args.apply(&mut config);
        assert!(config.display.quiet);
        assert!(config.display.debug);

        let mut defaults = AppConfig::default();
        Args::try_parse_from(["lifeboard", "-q"])
            .unwrap()
            .apply(&mut defaults);
        assert!(defaults.display.quiet);
        assert!(!defaults.display.debug);
    }
}
