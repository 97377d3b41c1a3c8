//! Action scripts loaded from TOML.
//!
//! A script is a list of actions replayed against a fresh game:
//!
//! ```toml
//! name = "branch from the opening"
//! actions = [
//!     { play = 0 },
//!     { play = 4 },
//!     { jump_to = 1 },
//!     { play = 8 },
//! ]
//! ```

use crate::games::tictactoe::{Action, ActionOutcome, GameError, GameState, MoveOutcome};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A named sequence of actions.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Script {
    /// Optional script name, used in logs.
    #[serde(default)]
    name: Option<String>,

    /// Actions applied in order.
    #[serde(default)]
    actions: Vec<Action>,

    /// Abort on the first rejected action instead of skipping it.
    #[serde(default = "default_stop_on_error")]
    stop_on_error: bool,
}

#[instrument]
fn default_stop_on_error() -> bool {
    true
}

impl Script {
    /// Creates an unnamed script.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn new(actions: Vec<Action>, stop_on_error: bool) -> Self {
        Self {
            name: None,
            actions,
            stop_on_error,
        }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;

        let script = Self::from_toml(&content)?;
        info!(name = ?script.name, actions = script.actions.len(), "Script loaded");
        Ok(script)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))
    }

    /// Runs every action against a new game.
    ///
    /// # Errors
    ///
    /// With `stop_on_error` set, returns the first error raised by an
    /// action. Otherwise rejected actions are logged, collected in the
    /// report, and skipped.
    #[instrument(skip(self), fields(name = ?self.name, count = self.actions.len()))]
    pub fn run(&self) -> Result<ScriptReport, GameError> {
        let mut report = ScriptReport::default();

        for (step, action) in self.actions.iter().enumerate() {
            match report.game.dispatch(*action) {
                Ok(ActionOutcome::Move(MoveOutcome::Played { .. })) => report.played += 1,
                Ok(ActionOutcome::Move(MoveOutcome::Ignored(reason))) => {
                    debug!(step, %action, %reason, "Action ignored");
                    report.ignored += 1;
                }
                Ok(ActionOutcome::Jumped { .. }) => report.jumps += 1,
                Err(e) if self.stop_on_error => {
                    warn!(step, %action, error = %e, "Stopping script");
                    return Err(e);
                }
                Err(e) => {
                    warn!(step, %action, error = %e, "Skipping rejected action");
                    report.failures.push(e);
                }
            }
        }

        info!(
            played = report.played,
            ignored = report.ignored,
            jumps = report.jumps,
            failures = report.failures.len(),
            "Script finished"
        );
        Ok(report)
    }
}

/// Tally of a script run and the resulting game.
#[derive(Debug, Clone, Default, Getters)]
pub struct ScriptReport {
    /// Final game state.
    game: GameState,
    /// Moves that recorded a snapshot.
    played: usize,
    /// Moves left without effect.
    ignored: usize,
    /// Cursor jumps.
    jumps: usize,
    /// Rejected actions, when not stopping on error.
    failures: Vec<GameError>,
}

impl ScriptReport {
    /// Consumes the report, returning the final game.
    pub fn into_game(self) -> GameState {
        self.game
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
