//! Command-line interface for the terminal game.

use crate::config::SessionConfig;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Tic-tac-toe in the terminal, optionally against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with an optional random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Start with the computer opponent disabled
    #[arg(long)]
    pub no_computer: bool,

    /// Mark played by the computer (x or o)
    #[arg(long)]
    pub computer_mark: Option<Mark>,

    /// Delay before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<String>,
}

impl Cli {
    /// Applies flags given on the command line over `config`.
    pub fn apply(&self, mut config: SessionConfig) -> SessionConfig {
        if self.no_computer {
            config = config.with_computer_enabled(false);
        }
        if let Some(mark) = self.computer_mark {
            config = config.with_computer_mark(mark);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_computer_delay_ms(delay);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        config
    }
}
