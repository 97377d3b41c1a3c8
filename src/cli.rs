//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_timeline::Action;

/// Tic-tac-toe with time-travel - replay moves and jumps headlessly
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Replay tic-tac-toe moves and history jumps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Output format for the final game view
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Status line, board and move list
    #[default]
    Text,
    /// The view as pretty-printed JSON
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a TOML action script
    Replay {
        /// Path to the script file
        #[arg(short, long)]
        script: std::path::PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Apply actions given on the command line (play:N or jump:N)
    Run {
        /// Actions in order, e.g. `play:4 play:0 jump:1`
        #[arg(required = true)]
        actions: Vec<Action>,

        /// Skip rejected actions instead of stopping
        #[arg(long)]
        keep_going: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
