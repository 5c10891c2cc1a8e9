//! Error types for the game core

use thiserror::Error;

/// Errors surfaced to the presentation layer
///
/// `Config` and `Io` come from loading settings. The rest are programming-logic
/// errors: the host called something out of order.
#[derive(Error, Debug)]
pub enum GameError {
    /// Unknown difficulty key
    #[error("Invalid difficulty: '{0}'")]
    InvalidDifficulty(String),

    /// `tick` called before `start`
    #[error("Game not started")]
    NotStarted,

    /// Malformed settings document
    #[error("Invalid settings: {0}")]
    Config(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
