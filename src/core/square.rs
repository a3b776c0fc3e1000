//! Board squares and dice faces.
//!
//! ## Square
//!
//! 1-based square number. Square 1 is the start, `total_squares` is the goal.
//!
//! ## DiceValue
//!
//! A face of a six-sided die, always in `1..=6`.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Number of faces on the die.
pub const DICE_FACES: u8 = 6;

/// A square on the board, numbered from 1.
///
/// Squares are validated against a board's `total_squares` when they come
/// from outside the engine. Inside the engine they never leave `1..=total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square(pub u16);

impl Square {
    /// The square every player starts on.
    pub const START: Square = Square(1);

    /// Create a square, checking it lies on a board of `total_squares`.
    pub fn new(value: u32, total_squares: u16) -> EngineResult<Self> {
        if value == 0 || value > u32::from(total_squares) {
            return Err(EngineError::InvalidSquare {
                square: value,
                total_squares,
            });
        }
        Ok(Self(value as u16))
    }

    /// Get the raw square number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Index of this square in a board path (0-based).
    ///
    /// Square 0 is not on any board; it maps to index 0 rather than wrapping.
    #[must_use]
    pub const fn path_index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square {}", self.0)
    }
}

/// A single die face in `1..=6`.
///
/// Deserialization goes through `DiceValue::new`, so a face read from a
/// payload is checked like one built in code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    /// The lowest face.
    pub const MIN: DiceValue = DiceValue(1);

    /// Wrap a face already known to be in `1..=6`.
    pub(crate) const fn from_face(face: u8) -> Self {
        debug_assert!(face >= 1 && face <= DICE_FACES);
        Self(face)
    }

    /// Create a dice value, rejecting anything outside `1..=6`.
    ///
    /// ```
    /// use snakes_ladders::core::DiceValue;
    ///
    /// assert_eq!(DiceValue::new(6).unwrap().value(), 6);
    /// assert!(DiceValue::new(0).is_err());
    /// assert!(DiceValue::new(7).is_err());
    /// ```
    pub fn new(value: u32) -> EngineResult<Self> {
        if (1..=u32::from(DICE_FACES)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(EngineError::InvalidDiceValue(value))
        }
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All faces, lowest first.
    pub fn all() -> impl Iterator<Item = DiceValue> {
        (1..=DICE_FACES).map(DiceValue)
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = EngineError;

    fn try_from(face: u8) -> EngineResult<Self> {
        Self::new(u32::from(face))
    }
}

impl From<DiceValue> for u8 {
    fn from(dice: DiceValue) -> u8 {
        dice.0
    }
}

impl std::fmt::Display for DiceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert_eq!(Square::new(1, 100), Ok(Square(1)));
        assert_eq!(Square::new(100, 100), Ok(Square(100)));
        assert_eq!(
            Square::new(0, 100),
            Err(EngineError::InvalidSquare { square: 0, total_squares: 100 })
        );
        assert!(Square::new(101, 100).is_err());
    }

    #[test]
    fn test_square_path_index() {
        assert_eq!(Square::START.path_index(), 0);
        assert_eq!(Square(100).path_index(), 99);
        assert_eq!(Square(0).path_index(), 0);
        assert_eq!(format!("{}", Square(42)), "Square 42");
    }

    #[test]
    fn test_dice_value_range() {
        for face in 1..=6 {
            assert_eq!(DiceValue::new(face).unwrap().value() as u32, face);
        }
        assert_eq!(DiceValue::new(0), Err(EngineError::InvalidDiceValue(0)));
        assert_eq!(DiceValue::new(12), Err(EngineError::InvalidDiceValue(12)));
    }

    #[test]
    fn test_dice_value_serde_is_checked() {
        let json = serde_json::to_string(&DiceValue::new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
        assert_eq!(serde_json::from_str::<DiceValue>(&json).unwrap().value(), 4);

        assert!(serde_json::from_str::<DiceValue>("0").is_err());
        assert!(serde_json::from_str::<DiceValue>("7").is_err());
        assert!(serde_json::from_str::<DiceValue>("9").is_err());
        assert_eq!(DiceValue::try_from(0u8), Err(EngineError::InvalidDiceValue(0)));
    }

    #[test]
    fn test_dice_value_all() {
        let faces: Vec<u8> = DiceValue::all().map(DiceValue::value).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }
}
