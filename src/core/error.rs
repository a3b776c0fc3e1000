//! Engine error types.
//!
//! Every variant is a caller-contract violation or a malformed input
//! (configuration file, snapshot). None is retryable and the engine has no
//! internal failure modes beyond these.

use std::fmt;

/// Errors returned by the board, rules and session APIs.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Dice value outside `1..=6`.
    InvalidDiceValue(u32),
    /// Player index outside `0..player_count`.
    InvalidPlayerIndex { index: usize, player_count: usize },
    /// Player count below 1 or above 255.
    InvalidPlayerCount(usize),
    /// Square number outside `1..=total_squares`.
    InvalidSquare { square: u32, total_squares: u16 },
    /// Board side length outside `2..=255`.
    InvalidBoardSize(u16),
    /// Tile size that is not a positive finite number.
    InvalidTileSize(f32),
    /// A snake or ladder that breaks the teleport table invariants.
    InvalidTeleport { from: u16, to: u16, reason: &'static str },
    /// The session already has a winner.
    GameOver,
    /// A roll was played that differs from the one drawn for the turn.
    RollMismatch { rolled: u8, played: u8 },
    /// Board configuration could not be read or parsed.
    Config(String),
    /// Session snapshot could not be encoded, decoded or restored.
    Snapshot(String),
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::InvalidDiceValue(value) => {
                write!(f, "Invalid dice value {}: must be between 1 and 6", value)
            }
            EngineError::InvalidPlayerIndex { index, player_count } => write!(
                f,
                "Invalid player index {}: game has {} players",
                index, player_count
            ),
            EngineError::InvalidPlayerCount(count) => {
                write!(f, "Invalid player count {}: must be between 1 and 255", count)
            }
            EngineError::InvalidSquare { square, total_squares } => write!(
                f,
                "Invalid square {}: board has squares 1 to {}",
                square, total_squares
            ),
            EngineError::InvalidBoardSize(size) => {
                write!(f, "Invalid board size {}: must be between 2 and 255", size)
            }
            EngineError::InvalidTileSize(size) => {
                write!(f, "Invalid tile size {}: must be positive and finite", size)
            }
            EngineError::InvalidTeleport { from, to, reason } => {
                write!(f, "Invalid teleport {} -> {}: {}", from, to, reason)
            }
            EngineError::GameOver => write!(f, "Game is over"),
            EngineError::RollMismatch { rolled, played } => {
                write!(f, "Rolled {} but tried to play {}", rolled, played)
            }
            EngineError::Config(msg) => write!(f, "Config error: {}", msg),
            EngineError::Snapshot(msg) => write!(f, "Snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
