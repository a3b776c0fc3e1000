//! Core engine types: squares, dice, players, RNG, configuration, errors.
//!
//! Everything here is board-agnostic. The classic layout lives in
//! `BoardConfig::standard()` rather than in code.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod square;

pub use config::{BoardConfig, TeleportLink, BOARD_SIZE, TOTAL_SQUARES};
pub use error::{EngineError, EngineResult};
pub use player::{check_player_count, PlayerId, PlayerMap, PlayerPositions, MAX_PLAYERS};
pub use rng::{DiceRoller, GameRng, GameRngState, ScriptedDice};
pub use square::{DiceValue, Square, DICE_FACES};
