//! # snakes-ladders
//!
//! Board and turn engine for Snakes & Ladders.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Board**: Size, tile size, snakes and ladders come from
//!    `BoardConfig`. The classic layout is just `BoardConfig::standard()`.
//!
//! 2. **Injected Dice**: Rules never touch a global RNG. Rolls come from a
//!    `DiceRoller`, so games are reproducible from a seed.
//!
//! 3. **Explicit State**: `Rules` is immutable and shareable. Positions are
//!    owned by the caller and changed only through `&mut`.
//!
//! ## Turn Sequence
//!
//! roll → target square (bounce back on overshoot) → at most one snake or
//! ladder → win check → next player.
//!
//! ```
//! use snakes_ladders::{initialize_player_positions, DiceValue, PlayerId, Rules, Square};
//!
//! let rules = Rules::standard();
//! let mut positions = initialize_player_positions(2).unwrap();
//!
//! let outcome = rules
//!     .move_player(&mut positions, PlayerId::new(0), DiceValue::new(1).unwrap())
//!     .unwrap();
//!
//! // Square 2 is the foot of a ladder to 23.
//! assert_eq!(outcome.final_position, Square(23));
//! ```
//!
//! ## Modules
//!
//! - `core`: Squares, dice, players, RNG, configuration, errors
//! - `board`: Path coordinates and teleport tables
//! - `rules`: Move resolution, win detection, turn rotation
//! - `game`: Sessions, statistics, events, snapshots

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, DiceRoller, DiceValue, EngineError, EngineResult, GameRng, GameRngState,
    PlayerId, PlayerMap, PlayerPositions, ScriptedDice, Square, TeleportLink,
};

pub use crate::board::{generate_path, BoardPath, GridCell, PathPoint, Teleport, TeleportKind};

pub use crate::rules::{
    bounce_back, initialize_player_positions, next_player, roll_dice, MoveOutcome, Rules,
    DEFAULT_PLAYER_COUNT,
};

pub use crate::game::{
    GameMode, GameSession, GameStats, SessionConfig, SessionEvent, SessionSnapshot,
    SessionStatus, TurnRecord,
};
