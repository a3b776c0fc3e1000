//! Board and turn engine.
//!
//! `Rules` owns the validated board (path and teleport tables) and resolves
//! moves against caller-owned positions:
//!
//! 1. `target_position`: add the roll, reflecting any overshoot off the
//!    final square
//! 2. `route` / waypoints: every square walked, for animation
//! 3. `teleport_destination`: at most one snake or ladder per move
//! 4. `is_winning_position`: exactly the final square
//!
//! Turn order is plain arithmetic (`next_player`); the caller drives the
//! sequence roll → move → win check → next player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{generate_path, BoardPath, PathPoint, Teleport, TeleportTable};
use crate::core::{
    check_player_count, BoardConfig, DiceRoller, DiceValue, EngineError, EngineResult, PlayerId,
    PlayerMap, PlayerPositions, Square,
};

/// Player count used when the caller has no preference.
pub const DEFAULT_PLAYER_COUNT: usize = 4;

/// Tile centres walked during a move. A six-sided die walks at most 7 squares.
pub type Waypoints = SmallVec<[PathPoint; 8]>;

/// Squares walked during a move, start included.
pub type Route = SmallVec<[Square; 8]>;

/// Result of moving one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player that moved.
    pub player: PlayerId,

    /// Roll that was applied.
    pub dice: DiceValue,

    /// Square before the move.
    pub start: Square,

    /// Square the roll landed on, before any teleport.
    pub target: Square,

    /// Square the player rests on.
    pub final_position: Square,

    /// Snake or ladder taken from `target`, if any.
    pub teleport: Option<Teleport>,

    /// Whether `final_position` is the winning square.
    pub won: bool,

    /// Tile centres from `start` through `target`, inclusive.
    pub waypoints: Waypoints,
}

impl MoveOutcome {
    /// Whether a snake or ladder moved the player.
    #[must_use]
    pub fn teleported(&self) -> bool {
        self.teleport.is_some()
    }

    /// Whether the roll overshot the final square and bounced back.
    #[must_use]
    pub fn bounced(&self) -> bool {
        u32::from(self.target.value()) < u32::from(self.start.value()) + u32::from(self.dice.value())
    }
}

/// Apply a roll of `steps` to square `current` on a board of `total` squares.
///
/// Overshoot is reflected once off the final square, then clamped to
/// `1..=total`.
///
/// ```
/// use snakes_ladders::rules::bounce_back;
///
/// assert_eq!(bounce_back(94, 6, 100), 100);
/// assert_eq!(bounce_back(98, 5, 100), 97);
/// assert_eq!(bounce_back(95, 12, 100), 93);
/// ```
#[must_use]
pub fn bounce_back(current: u32, steps: u32, total: u32) -> u32 {
    let raw = i64::from(current) + i64::from(steps);
    let total = i64::from(total);
    let target = if raw > total { total - (raw - total) } else { raw };
    target.clamp(1, total.max(1)) as u32
}

/// Roll one die from the injected source.
pub fn roll_dice<D: DiceRoller + ?Sized>(dice: &mut D) -> DiceValue {
    dice.roll()
}

/// Place `player_count` players on the start square.
///
/// ```
/// use snakes_ladders::core::Square;
/// use snakes_ladders::rules::{initialize_player_positions, DEFAULT_PLAYER_COUNT};
///
/// let positions = initialize_player_positions(DEFAULT_PLAYER_COUNT).unwrap();
/// assert_eq!(positions.as_slice(), &[Square(1); 4]);
/// ```
pub fn initialize_player_positions(player_count: usize) -> EngineResult<PlayerPositions> {
    PlayerMap::with_value(player_count, Square::START)
}

/// Player after `current`, wrapping to the first player.
pub fn next_player(current: PlayerId, player_count: usize) -> EngineResult<PlayerId> {
    check_player_count(player_count)?;
    if current.index() >= player_count {
        return Err(EngineError::InvalidPlayerIndex {
            index: current.index(),
            player_count,
        });
    }
    Ok(PlayerId(((current.index() + 1) % player_count) as u8))
}

/// Validated board rules.
///
/// Immutable after construction; share one instance between sessions with
/// `Arc<Rules>`.
#[derive(Clone, Debug)]
pub struct Rules {
    config: BoardConfig,
    path: BoardPath,
    teleports: TeleportTable,
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

impl Rules {
    /// Build rules for a board, validating its configuration.
    pub fn new(config: BoardConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Rules for the classic 10x10 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_validated(BoardConfig::standard())
    }

    fn from_validated(config: BoardConfig) -> Self {
        let path = generate_path(config.board_size, config.tile_size);
        let teleports = TeleportTable::from_validated(&config);
        Self {
            config,
            path,
            teleports,
        }
    }

    /// Board configuration these rules were built from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of squares; the last one wins.
    #[must_use]
    pub fn total_squares(&self) -> u16 {
        self.config.total_squares()
    }

    /// The board path generated at construction.
    #[must_use]
    pub fn path(&self) -> &BoardPath {
        &self.path
    }

    /// Generate a fresh copy of the board path.
    #[must_use]
    pub fn generate_path(&self) -> BoardPath {
        generate_path(self.config.board_size, self.config.tile_size)
    }

    /// Snake and ladder tables.
    #[must_use]
    pub fn teleports(&self) -> &TeleportTable {
        &self.teleports
    }

    /// Check that a raw square number lies on this board.
    pub fn square(&self, value: u32) -> EngineResult<Square> {
        Square::new(value, self.total_squares())
    }

    /// Square reached by walking `steps` from `current`, bouncing off the end.
    #[must_use]
    pub fn target_position(&self, current: Square, steps: u32) -> Square {
        let total = self.total_squares();
        Square(bounce_back(u32::from(current.value()), steps, u32::from(total)) as u16)
    }

    /// Every square walked from `start` for `steps`, start included.
    ///
    /// Walks forward to the final square and back again on overshoot, so the
    /// last entry always equals `target_position(start, steps)`.
    #[must_use]
    pub fn route(&self, start: Square, steps: u32) -> Route {
        let total = self.total_squares();
        let mut route = Route::new();
        route.push(start);

        let mut square = start.value();
        let mut forward = true;
        for _ in 0..steps {
            if forward && square >= total {
                forward = false;
            }
            if !forward && square <= 1 {
                break;
            }
            square = if forward { square + 1 } else { square - 1 };
            route.push(Square(square));
        }
        route
    }

    /// Where a teleport on `square` leads, if there is one.
    #[must_use]
    pub fn teleport_destination(&self, square: Square) -> Option<Square> {
        self.teleports.destination(square)
    }

    /// Whether `square` is the final square.
    #[must_use]
    pub fn is_winning_position(&self, square: Square) -> bool {
        square.value() == self.total_squares()
    }

    /// Move `player` by `dice`, writing the resting square into `positions`.
    ///
    /// At most one teleport is taken. `positions` is left untouched on error.
    pub fn move_player(
        &self,
        positions: &mut PlayerPositions,
        player: PlayerId,
        dice: DiceValue,
    ) -> EngineResult<MoveOutcome> {
        let start = *positions.try_get(player)?;
        self.square(u32::from(start.value()))?;

        let steps = u32::from(dice.value());
        let target = self.target_position(start, steps);
        let waypoints: Waypoints = self
            .route(start, steps)
            .into_iter()
            .filter_map(|square| self.path.point(square))
            .collect();

        let teleport = self.teleports.lookup(target);
        let final_position = teleport.map_or(target, |t| t.to);
        positions[player] = final_position;

        Ok(MoveOutcome {
            player,
            dice,
            start,
            target,
            final_position,
            teleport,
            won: self.is_winning_position(final_position),
            waypoints,
        })
    }

    /// Like `move_player`, but returns updated positions instead of mutating.
    pub fn apply_move(
        &self,
        positions: &PlayerPositions,
        player: PlayerId,
        dice: DiceValue,
    ) -> EngineResult<(PlayerPositions, MoveOutcome)> {
        let mut next = positions.clone();
        let outcome = self.move_player(&mut next, player, dice)?;
        Ok((next, outcome))
    }

    /// Whether `player`'s turn ends the game.
    ///
    /// Only the win condition is reported; every move consumes the turn and
    /// there are no bonus rolls.
    pub fn should_end_turn(&self, positions: &PlayerPositions, player: PlayerId) -> EngineResult<bool> {
        Ok(self.is_winning_position(*positions.try_get(player)?))
    }
}
