//! Board and turn engine.
//!
//! Pure move resolution over caller-owned positions:
//! - Dice rolls from an injected `DiceRoller`
//! - Bounce-back on overshoot
//! - Snake and ladder teleports
//! - Win detection and turn rotation
//!
//! Nothing here keeps state between calls. `game::GameSession` builds a
//! stateful match on top.

pub mod engine;

pub use engine::{
    bounce_back, initialize_player_positions, next_player, roll_dice, MoveOutcome, Route, Rules,
    Waypoints, DEFAULT_PLAYER_COUNT,
};
