//! Dice sources.
//!
//! Rules never draw randomness themselves; a `DiceRoller` is passed in.
//! `GameRng` is the seeded roller sessions use, and `ScriptedDice` replays a
//! fixed list of faces for tests and replays.
//!
//! ```
//! use snakes_ladders::core::{DiceRoller, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert!((0..10).all(|_| a.roll() == b.roll()));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::square::{DiceValue, DICE_FACES};

/// Source of dice rolls.
///
/// Unscripted implementations must return every face with equal probability.
pub trait DiceRoller {
    fn roll(&mut self) -> DiceValue;
}

impl<D: DiceRoller + ?Sized> DiceRoller for &mut D {
    fn roll(&mut self) -> DiceValue {
        (**self).roll()
    }
}

/// Seeded six-sided die backed by ChaCha8.
///
/// The stream position can be captured with `state` and resumed with
/// `from_state` without replaying earlier rolls.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a stream at a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }
}

impl DiceRoller for GameRng {
    fn roll(&mut self) -> DiceValue {
        DiceValue::from_face(self.stream.gen_range(1..=DICE_FACES))
    }
}

/// Position in a `GameRng` stream: the seed plus ChaCha8's word counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

/// Replays a fixed list of faces, starting over when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<DiceValue>,
    next: usize,
}

impl ScriptedDice {
    /// An empty script always rolls 1.
    pub fn new(faces: impl IntoIterator<Item = DiceValue>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            next: 0,
        }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> DiceValue {
        let Some(&face) = self.faces.get(self.next % self.faces.len().max(1)) else {
            return DiceValue::MIN;
        };
        self.next += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(face: u32) -> DiceValue {
        DiceValue::new(face).unwrap()
    }

    fn rolls(dice: &mut impl DiceRoller, n: usize) -> Vec<u8> {
        (0..n).map(|_| dice.roll().value()).collect()
    }

    #[test]
    fn test_same_seed_same_rolls() {
        assert_eq!(rolls(&mut GameRng::new(42), 100), rolls(&mut GameRng::new(42), 100));
        assert_ne!(rolls(&mut GameRng::new(1), 20), rolls(&mut GameRng::new(2), 20));
    }

    #[test]
    fn test_faces_are_roughly_uniform() {
        let mut counts = [0u32; DICE_FACES as usize];
        for face in rolls(&mut GameRng::new(7), 6000) {
            counts[usize::from(face) - 1] += 1;
        }

        // 1000 expected per face
        assert!(counts.iter().all(|c| (800..1200).contains(c)), "{:?}", counts);
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng = GameRng::new(42);
        rolls(&mut rng, 37);

        let state = rng.state();
        let mut resumed = GameRng::from_state(&state);

        assert_eq!(resumed.seed(), 42);
        assert_eq!(rolls(&mut rng, 10), rolls(&mut resumed, 10));
    }

    #[test]
    fn test_state_json() {
        let state = GameRng::new(9).state();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new([dv(3), dv(6)]);
        assert_eq!(rolls(&mut dice, 5), [3, 6, 3, 6, 3]);

        let mut empty = ScriptedDice::new(Vec::new());
        assert_eq!(empty.roll(), DiceValue::MIN);
    }

    #[test]
    fn test_roller_by_mut_reference() {
        fn roll_twice(mut dice: impl DiceRoller) -> (DiceValue, DiceValue) {
            (dice.roll(), dice.roll())
        }

        let mut dice = ScriptedDice::new([dv(2), dv(5)]);
        assert_eq!(roll_twice(&mut dice), (dv(2), dv(5)));
        // the borrowed script kept its place
        assert_eq!(dice.roll(), dv(2));
    }
}
