//! A match in progress.
//!
//! `GameSession` owns the positions, turn order, dice stream and bookkeeping
//! for one game and drives `Rules` through the turn sequence:
//!
//! 1. `roll_dice` / `roll_with`: draw the current player's roll
//! 2. `play_roll`: move, teleport, record
//! 3. win ends the session, otherwise the next player is up
//!
//! A drawn roll stays pending until it is played; drawing again returns the
//! same roll and `play_roll` only accepts that value. `take_turn` does all
//! three with the session's own dice.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::event::{SessionEvent, TurnRecord};
use super::snapshot::SessionSnapshot;
use super::stats::GameStats;
use crate::core::{
    DiceRoller, DiceValue, EngineError, EngineResult, GameRng, PlayerId, PlayerMap,
    PlayerPositions, Square,
};
use crate::rules::{initialize_player_positions, next_player, MoveOutcome, Rules};

/// How the session was started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One player racing the board.
    #[default]
    Single,
    /// Several players sharing one device.
    Local,
}

/// Settings for a new session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: GameMode,

    /// Number of players (1-255).
    pub player_count: usize,

    /// Display names. Empty means "Player 1", "Player 2", ...
    pub player_names: Vec<String>,

    /// Seed for the session's dice.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            player_count: 1,
            player_names: Vec::new(),
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Settings for `player_count` players; more than one selects `Local`.
    pub fn new(player_count: usize) -> Self {
        let mode = if player_count > 1 {
            GameMode::Local
        } else {
            GameMode::Single
        };
        Self {
            mode,
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Whether a session is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Finished { winner: PlayerId },
}

/// A single game of Snakes & Ladders.
///
/// Cloning is cheap: history is an `im::Vector` and the rules are shared.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: Arc<Rules>,
    mode: GameMode,
    positions: PlayerPositions,
    names: PlayerMap<String>,
    current: PlayerId,
    turn_number: u32,
    status: SessionStatus,
    stats: GameStats,
    history: Vector<TurnRecord>,
    events: Vec<SessionEvent>,
    rng: GameRng,
    pending_roll: Option<DiceValue>,
}

impl GameSession {
    /// Start a new session with every player on square 1.
    pub fn new(rules: Arc<Rules>, config: SessionConfig) -> EngineResult<Self> {
        let positions = initialize_player_positions(config.player_count)?;
        let names = player_names(config.player_count, config.player_names)?;

        let mut session = Self {
            rules,
            mode: config.mode,
            positions,
            names,
            current: PlayerId::new(0),
            turn_number: 1,
            status: SessionStatus::InProgress,
            stats: GameStats::new(),
            history: Vector::new(),
            events: Vec::new(),
            rng: GameRng::new(config.seed),
            pending_roll: None,
        };
        session.events.push(SessionEvent::Started {
            mode: session.mode,
            player_count: session.player_count(),
        });
        Ok(session)
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The dice stream resumes exactly where the snapshot was taken.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> EngineResult<Self> {
        let rules = Arc::new(Rules::new(snapshot.board)?);

        let positions = PlayerMap::from_vec(snapshot.positions)?;
        for (_, square) in positions.iter() {
            rules.square(u32::from(square.value()))?;
        }
        let names = player_names(positions.player_count(), snapshot.names)?;
        positions.check_player(snapshot.current_player)?;

        // Finished exactly when someone stands on the final square.
        let on_final_square = positions
            .iter()
            .find(|&(_, &square)| rules.is_winning_position(square))
            .map(|(player, _)| player);
        let status = match snapshot.winner {
            Some(winner) => {
                positions.check_player(winner)?;
                if on_final_square != Some(winner) || snapshot.current_player != winner {
                    return Err(EngineError::Snapshot(format!(
                        "{} is recorded as winner but is not the current player on the final square",
                        winner
                    )));
                }
                if snapshot.pending_roll.is_some() {
                    return Err(EngineError::Snapshot(
                        "finished session has a pending roll".to_string(),
                    ));
                }
                SessionStatus::Finished { winner }
            }
            None => {
                if let Some(player) = on_final_square {
                    return Err(EngineError::Snapshot(format!(
                        "{} is on the final square but no winner is recorded",
                        player
                    )));
                }
                SessionStatus::InProgress
            }
        };

        Ok(Self {
            rules,
            mode: snapshot.mode,
            positions,
            names,
            current: snapshot.current_player,
            turn_number: snapshot.turn_number,
            status,
            stats: snapshot.stats,
            history: snapshot.history.into_iter().collect(),
            events: Vec::new(),
            rng: GameRng::from_state(&snapshot.rng),
            pending_roll: snapshot.pending_roll,
        })
    }

    /// Capture everything needed to resume this session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.rules.config().clone(),
            mode: self.mode,
            positions: self.positions.as_slice().to_vec(),
            names: self.names.as_slice().to_vec(),
            current_player: self.current,
            turn_number: self.turn_number,
            winner: self.winner(),
            stats: self.stats.clone(),
            history: self.history.iter().cloned().collect(),
            rng: self.rng.state(),
            pending_roll: self.pending_roll,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &Arc<Rules> {
        &self.rules
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.positions.player_count()
    }

    /// Player whose turn it is. After a win, the winner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turn counter, starting at 1 and incremented on every turn change.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerPositions {
        &self.positions
    }

    pub fn position_of(&self, player: PlayerId) -> EngineResult<Square> {
        self.positions.try_get(player).copied()
    }

    pub fn player_name(&self, player: PlayerId) -> EngineResult<&str> {
        self.names.try_get(player).map(String::as_str)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            SessionStatus::Finished { winner } => Some(winner),
            SessionStatus::InProgress => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::InProgress
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.is_active()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Every move made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Roll drawn for the current player and not yet played.
    #[must_use]
    pub fn pending_roll(&self) -> Option<DiceValue> {
        self.pending_roll
    }

    /// Take the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Turn Sequence ===

    /// Draw a roll for the current player from the session's dice.
    ///
    /// The roll is not applied; pass it to `play_roll`. While a roll is
    /// pending, this returns it again instead of drawing.
    pub fn roll_dice(&mut self) -> EngineResult<DiceValue> {
        self.ensure_active()?;
        if let Some(dice) = self.pending_roll {
            return Ok(dice);
        }
        let dice = self.rng.roll();
        self.record_draw(dice);
        Ok(dice)
    }

    /// Draw a roll from an external source, e.g. dice thrown in the UI.
    ///
    /// Like `roll_dice`, a pending roll is returned without drawing.
    pub fn roll_with<D: DiceRoller + ?Sized>(&mut self, dice: &mut D) -> EngineResult<DiceValue> {
        self.ensure_active()?;
        if let Some(pending) = self.pending_roll {
            return Ok(pending);
        }
        let value = dice.roll();
        self.record_draw(value);
        Ok(value)
    }

    /// Apply a roll to the current player.
    ///
    /// With a pending roll, `dice` must match it (`RollMismatch` otherwise).
    /// Without one, `dice` counts as this turn's draw. Ends the session on a
    /// win, otherwise passes the turn on.
    pub fn play_roll(&mut self, dice: DiceValue) -> EngineResult<MoveOutcome> {
        self.ensure_active()?;
        if let Some(rolled) = self.pending_roll {
            if rolled != dice {
                return Err(EngineError::RollMismatch {
                    rolled: rolled.value(),
                    played: dice.value(),
                });
            }
        }

        let player = self.current;
        let outcome = self.rules.move_player(&mut self.positions, player, dice)?;
        if self.pending_roll.take().is_none() {
            self.record_draw(dice);
        }

        self.stats.record_move(&outcome);
        self.history
            .push_back(TurnRecord::from_outcome(self.turn_number, &outcome));

        self.events.push(SessionEvent::Moved {
            player,
            from: outcome.start,
            to: outcome.target,
            bounced: outcome.bounced(),
        });
        if let Some(teleport) = outcome.teleport {
            self.events.push(SessionEvent::Teleported { player, teleport });
        }

        if self.rules.should_end_turn(&self.positions, player)? {
            self.status = SessionStatus::Finished { winner: player };
            self.events.push(SessionEvent::Finished {
                winner: player,
                turn_number: self.turn_number,
            });
        } else {
            self.advance_turn()?;
        }

        Ok(outcome)
    }

    /// Roll the session's dice and apply the result.
    pub fn take_turn(&mut self) -> EngineResult<MoveOutcome> {
        let dice = self.roll_dice()?;
        self.play_roll(dice)
    }

    /// Pass the turn without moving. A pending roll is discarded.
    pub fn end_turn(&mut self) -> EngineResult<PlayerId> {
        self.ensure_active()?;
        self.pending_roll = None;
        self.advance_turn()?;
        Ok(self.current)
    }

    /// Put a player on a square directly, without teleports.
    ///
    /// The final square is only reached by a roll, so placing a player there
    /// fails with `InvalidSquare`.
    pub fn set_position(&mut self, player: PlayerId, square: Square) -> EngineResult<()> {
        self.ensure_active()?;
        let square = self.rules.square(u32::from(square.value()))?;
        if self.rules.is_winning_position(square) {
            return Err(EngineError::InvalidSquare {
                square: u32::from(square.value()),
                total_squares: self.rules.total_squares(),
            });
        }
        *self.positions.try_get_mut(player)? = square;
        Ok(())
    }

    /// Play until someone wins or `max_turns` turns have been taken.
    ///
    /// Returns the winner, if any.
    pub fn play_to_end(&mut self, max_turns: u32) -> EngineResult<Option<PlayerId>> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            self.take_turn()?;
        }
        Ok(self.winner())
    }

    fn record_draw(&mut self, dice: DiceValue) {
        self.stats.record_roll(dice);
        self.events.push(SessionEvent::DiceRolled {
            player: self.current,
            dice,
        });
    }

    fn advance_turn(&mut self) -> EngineResult<()> {
        self.current = next_player(self.current, self.player_count())?;
        self.turn_number += 1;
        self.events.push(SessionEvent::TurnChanged {
            player: self.current,
            turn_number: self.turn_number,
        });
        Ok(())
    }

    fn ensure_active(&self) -> EngineResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(EngineError::GameOver)
        }
    }
}

fn player_names(player_count: usize, names: Vec<String>) -> EngineResult<PlayerMap<String>> {
    if names.is_empty() {
        return PlayerMap::new(player_count, |p| format!("Player {}", p.index() + 1));
    }
    if names.len() != player_count {
        return Err(EngineError::InvalidPlayerCount(names.len()));
    }
    PlayerMap::from_vec(names)
}
