//! Session events and turn history.
//!
//! Events are queued by `GameSession` as things happen and drained by the
//! caller (UI, animation, leaderboard). History is the permanent record of
//! every move and survives snapshots; events do not.

use serde::{Deserialize, Serialize};

use super::session::GameMode;
use crate::board::Teleport;
use crate::core::{DiceValue, PlayerId, Square};
use crate::rules::MoveOutcome;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A session was created.
    Started { mode: GameMode, player_count: usize },

    /// The session drew a roll for `player`.
    DiceRolled { player: PlayerId, dice: DiceValue },

    /// `player` walked from `from` to `to` (before any teleport).
    Moved {
        player: PlayerId,
        from: Square,
        to: Square,
        bounced: bool,
    },

    /// `player` took a snake or ladder.
    Teleported { player: PlayerId, teleport: Teleport },

    /// It is now `player`'s turn.
    TurnChanged { player: PlayerId, turn_number: u32 },

    /// `winner` reached the final square.
    Finished { winner: PlayerId, turn_number: u32 },
}

/// One resolved move in a session's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn the move was made on (starts at 1).
    pub turn_number: u32,
    pub player: PlayerId,
    pub dice: DiceValue,
    pub start: Square,
    pub target: Square,
    pub final_position: Square,
    pub teleport: Option<Teleport>,
    pub won: bool,
}

impl TurnRecord {
    /// Summarise a move made on `turn_number`.
    #[must_use]
    pub fn from_outcome(turn_number: u32, outcome: &MoveOutcome) -> Self {
        Self {
            turn_number,
            player: outcome.player,
            dice: outcome.dice,
            start: outcome.start,
            target: outcome.target,
            final_position: outcome.final_position,
            teleport: outcome.teleport,
            won: outcome.won,
        }
    }
}
