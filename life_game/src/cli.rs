//! Command-line interface for the Game of Life.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{GameConfig, ResultsFormat};
use crate::error::GameError;

/// A turn-based text game for two players
#[derive(Parser, Debug)]
#[command(name = "life-game")]
#[command(about = "A turn-based text game for two players")]
#[command(version)]
pub struct Args {
    /// Load settings from a TOML file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Seed the RNG to replay a game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the final results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Merge the config file (if any) with flags given on the command line.
    pub fn resolve_config(&self) -> Result<GameConfig, GameError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load_from_file(path)?,
            None => GameConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.json {
            config.results = ResultsFormat::Json;
        }
        Ok(config)
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
