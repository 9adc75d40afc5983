use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "Guess the word before the hangman is complete")]
#[command(version)]
pub struct Cli {
    /// Seed for word selection (random if not specified)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write logs to this file; the game screen owns the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    /// Word-selection RNG, seeded if `--seed` was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Install the tracing subscriber. Without `--log-file` logging stays off.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_max_level(self.log_level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hangterm"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.log_level, Level::INFO);
        assert!(cli.init_logging().is_ok());
    }

    #[test]
    fn test_seed_is_deterministic() {
        let cli = Cli::try_parse_from(["hangterm", "--seed", "9", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Level::DEBUG);
        let a: u64 = cli.rng().random();
        let b: u64 = cli.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_level() {
        assert!(Cli::try_parse_from(["hangterm", "--log-level", "loud"]).is_err());
    }
}
