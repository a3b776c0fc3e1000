//! Players and per-player storage.
//!
//! Players are numbered from 0 in turn order. Anything tracked per player
//! (squares, names) lives in a `PlayerMap`, which always holds between 1 and
//! `MAX_PLAYERS` entries.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{EngineError, EngineResult};
use super::square::Square;

/// Largest supported player count.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Seat in the turn order, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Position in the turn order, usable as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seats `0..player_count` in turn order.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let seats: Vec<u8> = PlayerId::all(3).map(|p| p.0).collect();
    /// assert_eq!(seats, [0, 1, 2]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS)).map(|seat| PlayerId(seat as u8))
    }
}

/// Shown 1-based, matching the default player names.
impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Check a player count is in `1..=MAX_PLAYERS`.
pub fn check_player_count(player_count: usize) -> EngineResult<()> {
    if (1..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(EngineError::InvalidPlayerCount(player_count))
    }
}

/// One value per player, indexed by `PlayerId`.
///
/// Indexing with `[]` panics on a seat that is not in the game; caller input
/// goes through `try_get` / `try_get_mut` instead.
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap, Square};
///
/// let mut squares = PlayerMap::with_value(2, Square::START).unwrap();
/// squares[PlayerId::new(1)] = Square(23);
///
/// assert_eq!(squares.as_slice(), &[Square(1), Square(23)]);
/// assert!(squares.try_get(PlayerId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

/// Square of every player.
pub type PlayerPositions = PlayerMap<Square>;

impl<T> PlayerMap<T> {
    /// Build `player_count` entries, one call to `init` per seat.
    pub fn new(player_count: usize, init: impl FnMut(PlayerId) -> T) -> EngineResult<Self> {
        check_player_count(player_count)?;
        Ok(Self {
            seats: PlayerId::all(player_count).map(init).collect(),
        })
    }

    /// `player_count` copies of `value`.
    pub fn with_value(player_count: usize, value: T) -> EngineResult<Self>
    where
        T: Clone,
    {
        check_player_count(player_count)?;
        Ok(Self {
            seats: vec![value; player_count],
        })
    }

    /// Wrap values already in turn order.
    pub fn from_vec(seats: Vec<T>) -> EngineResult<Self> {
        check_player_count(seats.len())?;
        Ok(Self { seats })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// `InvalidPlayerIndex` unless `player` has a seat here.
    pub fn check_player(&self, player: PlayerId) -> EngineResult<()> {
        if player.index() < self.seats.len() {
            return Ok(());
        }
        Err(EngineError::InvalidPlayerIndex {
            index: player.index(),
            player_count: self.seats.len(),
        })
    }

    pub fn try_get(&self, player: PlayerId) -> EngineResult<&T> {
        self.check_player(player)?;
        Ok(&self.seats[player.index()])
    }

    pub fn try_get_mut(&mut self, player: PlayerId) -> EngineResult<&mut T> {
        self.check_player(player)?;
        Ok(&mut self.seats[player.index()])
    }

    /// Seats with their values, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(&self.seats)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.seats
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_display_is_one_based() {
        assert_eq!(PlayerId::new(0).to_string(), "Player 1");
        assert_eq!(PlayerId::new(3).to_string(), "Player 4");
        assert_eq!(PlayerId::new(3).index(), 3);
    }

    #[test]
    fn test_all_seats() {
        assert_eq!(PlayerId::all(2).collect::<Vec<_>>(), [PlayerId(0), PlayerId(1)]);
        assert_eq!(PlayerId::all(0).count(), 0);
        assert_eq!(PlayerId::all(1_000).count(), MAX_PLAYERS);
    }

    #[test]
    fn test_construction_per_seat() {
        let names = PlayerMap::new(3, |p| format!("P{}", p.0)).unwrap();
        assert_eq!(names.as_slice(), ["P0", "P1", "P2"]);
        assert_eq!(names.player_count(), 3);

        let squares = PlayerMap::with_value(MAX_PLAYERS, Square::START).unwrap();
        assert_eq!(squares[PlayerId(254)], Square(1));
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(
            PlayerMap::with_value(0, Square::START),
            Err(EngineError::InvalidPlayerCount(0))
        );
        assert_eq!(
            PlayerMap::new(256, |_| 0u8),
            Err(EngineError::InvalidPlayerCount(256))
        );
        assert!(PlayerMap::<u8>::from_vec(Vec::new()).is_err());
    }

    #[test]
    fn test_checked_access() {
        let mut squares = PlayerMap::with_value(2, Square::START).unwrap();

        assert_eq!(squares.try_get(PlayerId(1)), Ok(&Square(1)));
        assert_eq!(
            squares.try_get(PlayerId(2)),
            Err(EngineError::InvalidPlayerIndex { index: 2, player_count: 2 })
        );
        assert!(squares.try_get_mut(PlayerId(9)).is_err());

        *squares.try_get_mut(PlayerId(0)).unwrap() = Square(9);
        assert_eq!(squares.as_slice(), &[Square(9), Square(1)]);
    }

    #[test]
    fn test_iter_pairs_seats_with_values() {
        let squares = PlayerMap::from_vec(vec![Square(4), Square(23)]).unwrap();

        let pairs: Vec<_> = squares.iter().collect();
        assert_eq!(pairs, [(PlayerId(0), &Square(4)), (PlayerId(1), &Square(23))]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let squares = PlayerMap::from_vec(vec![Square(1), Square(23)]).unwrap();

        let json = serde_json::to_string(&squares).unwrap();
        assert_eq!(json, "[1,23]");
        let back: PlayerPositions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, squares);
    }
}
