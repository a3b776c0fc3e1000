//! Session save and restore.
//!
//! A snapshot carries the board, every player's square, the turn state, the
//! history and the dice stream position. Restoring it resumes the session
//! with the same upcoming rolls. Queued events are not saved.
//!
//! Restore rejects a snapshot whose winner disagrees with the board: a
//! recorded winner must be the current player and stand on the final square,
//! and without a winner nobody may stand there.

use serde::{Deserialize, Serialize};

use super::event::TurnRecord;
use super::session::GameMode;
use super::stats::GameStats;
use crate::core::{BoardConfig, DiceValue, EngineResult, GameRngState, PlayerId, Square};

/// Everything needed to rebuild a `GameSession`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: BoardConfig,
    pub mode: GameMode,
    pub positions: Vec<Square>,
    pub names: Vec<String>,
    pub current_player: PlayerId,
    pub turn_number: u32,
    pub winner: Option<PlayerId>,
    pub stats: GameStats,
    pub history: Vec<TurnRecord>,
    pub rng: GameRngState,
    pub pending_roll: Option<DiceValue>,
}

impl SessionSnapshot {
    /// Encode as bincode.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The contents are validated on restore, not here.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineError, GameRng};
    use crate::game::{GameSession, SessionConfig};
    use crate::rules::Rules;
    use std::sync::Arc;

    fn played_session() -> GameSession {
        let mut game =
            GameSession::new(Arc::new(Rules::standard()), SessionConfig::new(3).with_seed(7))
                .unwrap();
        for _ in 0..12 {
            game.take_turn().unwrap();
        }
        game
    }

    #[test]
    fn test_bytes_roundtrip() {
        let snapshot = played_session().snapshot();

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = SessionSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn test_restore_resumes_dice_stream() {
        let mut original = played_session();
        let mut restored = GameSession::from_snapshot(original.snapshot()).unwrap();

        assert_eq!(restored.positions(), original.positions());
        assert_eq!(restored.turn_number(), original.turn_number());
        assert_eq!(restored.history().len(), 12);
        assert!(restored.drain_events().is_empty());

        for _ in 0..10 {
            assert_eq!(restored.take_turn().ok(), original.take_turn().ok());
        }
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = SessionSnapshot::from_bytes(&[0xFF, 0x01]);
        assert!(matches!(result, Err(EngineError::Snapshot(_))));
    }

    fn bare_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            board: BoardConfig::standard(),
            mode: GameMode::Local,
            positions: vec![Square(1), Square(1)],
            names: Vec::new(),
            current_player: PlayerId(0),
            turn_number: 1,
            winner: None,
            stats: GameStats::default(),
            history: Vec::new(),
            rng: GameRng::new(1).state(),
            pending_roll: None,
        }
    }

    #[test]
    fn test_restore_validates_contents() {
        assert!(GameSession::from_snapshot(bare_snapshot()).is_ok());

        let mut off_board = bare_snapshot();
        off_board.positions[1] = Square(150);
        assert_eq!(
            GameSession::from_snapshot(off_board).unwrap_err(),
            EngineError::InvalidSquare { square: 150, total_squares: 100 }
        );

        let mut bad_current = bare_snapshot();
        bad_current.current_player = PlayerId(2);
        assert_eq!(
            GameSession::from_snapshot(bad_current).unwrap_err(),
            EngineError::InvalidPlayerIndex { index: 2, player_count: 2 }
        );

        let mut no_players = bare_snapshot();
        no_players.positions.clear();
        assert_eq!(
            GameSession::from_snapshot(no_players).unwrap_err(),
            EngineError::InvalidPlayerCount(0)
        );

        let mut finished = bare_snapshot();
        finished.positions[1] = Square(100);
        finished.current_player = PlayerId(1);
        finished.winner = Some(PlayerId(1));
        let game = GameSession::from_snapshot(finished).unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(PlayerId(1)));
    }

    #[test]
    fn test_restore_rejects_inconsistent_win_state() {
        // Winner still on the start square
        let mut winner_off_goal = bare_snapshot();
        winner_off_goal.winner = Some(PlayerId(1));
        assert!(matches!(
            GameSession::from_snapshot(winner_off_goal),
            Err(EngineError::Snapshot(_))
        ));

        // Winner on the goal but someone else holds the turn
        let mut winner_not_current = bare_snapshot();
        winner_not_current.positions[1] = Square(100);
        winner_not_current.winner = Some(PlayerId(1));
        assert!(matches!(
            GameSession::from_snapshot(winner_not_current),
            Err(EngineError::Snapshot(_))
        ));

        // Someone on the goal with no winner recorded
        let mut unrecorded_win = bare_snapshot();
        unrecorded_win.positions[0] = Square(100);
        assert!(matches!(
            GameSession::from_snapshot(unrecorded_win),
            Err(EngineError::Snapshot(_))
        ));

        let mut finished_with_roll = bare_snapshot();
        finished_with_roll.positions[0] = Square(100);
        finished_with_roll.winner = Some(PlayerId(0));
        finished_with_roll.pending_roll = Some(DiceValue::new(4).unwrap());
        assert!(matches!(
            GameSession::from_snapshot(finished_with_roll),
            Err(EngineError::Snapshot(_))
        ));
    }

    #[test]
    fn test_pending_roll_survives_restore() {
        let mut game = played_session();
        let rolled = game.roll_dice().unwrap();

        let mut restored = GameSession::from_snapshot(game.snapshot()).unwrap();

        assert_eq!(restored.pending_roll(), Some(rolled));
        assert_eq!(restored.roll_dice(), Ok(rolled));
        assert_eq!(restored.take_turn().ok(), game.take_turn().ok());
    }
}
