//! Command-line configuration
//!
//! [`Args`] is the raw clap surface; [`Config`] is the validated form the
//! rest of the crate consumes. All settings are fixed for the process
//! lifetime.

use crate::rules::{RuleError, RuleSet};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default alive-fill probability, in percent
pub const DEFAULT_FILL_PERCENT: u8 = 35;

/// Default pacing delay between generations (1/20 s)
pub const DEFAULT_DELAY_MS: u64 = 50;

#[derive(Parser, Debug, Clone)]
#[command(name = "lifetty", version)]
#[command(about = "Conway's Game of Life in the terminal, with configurable rules", long_about = None)]
pub struct Args {
    /// Probability (percent) that a cell starts alive
    #[arg(long, default_value_t = DEFAULT_FILL_PERCENT, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fill: u8,

    /// Neighbor counts that keep a living cell alive
    #[arg(long, value_delimiter = ',', default_values_t = [2, 3], conflicts_with = "rule")]
    pub survive: Vec<u8>,

    /// Neighbor counts that bring a dead cell to life
    #[arg(long, value_delimiter = ',', default_values_t = [3, 6], conflicts_with = "rule")]
    pub born: Vec<u8>,

    /// Rule in B/S notation (e.g. B3/S23); replaces --survive and --born
    #[arg(long)]
    pub rule: Option<RuleSet>,

    /// Stop after this many generations
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Milliseconds to pause between generations
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Grid width in cells (defaults to the terminal width)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Grid height in cells (defaults to the terminal height minus the status line)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<u16>,

    /// Seed for the initial pattern (defaults to the wall clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Character drawn for living cells
    #[arg(long, default_value_t = 'x')]
    pub alive_glyph: char,

    /// Character drawn for dead cells
    #[arg(long, default_value_t = ' ')]
    pub dead_glyph: char,

    /// Write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rule: {0}")]
    Rule(#[from] RuleError),
}

/// Characters used for living and dead cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            alive: 'x',
            dead: ' ',
        }
    }
}

/// Settings that shape a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub fill_percent: u8,
    pub rules: RuleSet,
    /// `None` runs until everything dies
    pub generation_limit: Option<u64>,
    /// `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Explicit dimensions; `None` inherits from the viewport
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            fill_percent: DEFAULT_FILL_PERCENT,
            rules: RuleSet::default(),
            generation_limit: None,
            seed: None,
            width: None,
            height: None,
        }
    }
}

/// Validated process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub delay: Duration,
    pub glyphs: Glyphs,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            simulation: SimulationConfig::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            glyphs: Glyphs::default(),
            log_file: None,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let rules = match args.rule {
            Some(rules) => rules,
            None => RuleSet::from_counts(&args.survive, &args.born)?,
        };

        Ok(Config {
            simulation: SimulationConfig {
                fill_percent: args.fill,
                rules,
                generation_limit: args.limit,
                seed: args.seed,
                width: args.width,
                height: args.height,
            },
            delay: Duration::from_millis(args.delay_ms),
            glyphs: Glyphs {
                alive: args.alive_glyph,
                dead: args.dead_glyph,
            },
            log_file: args.log_file,
        })
    }
}
