//! Tic-tac-toe timeline - headless driver
//!
//! Feeds actions into a game and prints the resulting view.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use tictactoe_timeline::{GameView, Script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script, format } => {
            let script = Script::from_file(&script)?;
            run_script(&script, format)
        }
        Command::Run {
            actions,
            keep_going,
            format,
        } => run_script(&Script::new(actions, !keep_going), format),
    }
}

/// Runs a script and prints the final view
#[instrument(skip(script))]
fn run_script(script: &Script, format: OutputFormat) -> Result<()> {
    let report = script.run()?;
    info!(
        played = report.played(),
        ignored = report.ignored(),
        jumps = report.jumps(),
        "Replay complete"
    );

    for failure in report.failures() {
        eprintln!("skipped: {}", failure);
    }

    let view = GameView::from(report.game());
    match format {
        OutputFormat::Text => print!("{}", view),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
