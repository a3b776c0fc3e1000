//! Per-session statistics.

use serde::{Deserialize, Serialize};

use crate::board::TeleportKind;
use crate::core::{DiceValue, DICE_FACES};
use crate::rules::MoveOutcome;

/// Statistics collected while a session is played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Moves that ended on a snake's head.
    pub snakes_hit: u32,

    /// Moves that ended on a ladder's foot.
    pub ladders_climbed: u32,

    /// Moves that overshot the final square.
    pub bounces: u32,

    /// Rolls drawn, whether or not they have been played yet.
    pub total_dice_rolls: u32,

    /// Count of each face, index 0 is a roll of 1.
    pub dice_distribution: [u32; DICE_FACES as usize],

    /// Highest roll seen.
    pub longest_roll: Option<u8>,

    /// Lowest roll seen.
    pub shortest_roll: Option<u8>,
}

impl GameStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a drawn roll.
    pub fn record_roll(&mut self, dice: DiceValue) {
        let face = dice.value();
        self.total_dice_rolls += 1;
        self.dice_distribution[usize::from(face) - 1] += 1;
        self.longest_roll = Some(self.longest_roll.map_or(face, |longest| longest.max(face)));
        self.shortest_roll = Some(self.shortest_roll.map_or(face, |shortest| shortest.min(face)));
    }

    /// Record a resolved move. Its roll is recorded separately, when drawn.
    pub fn record_move(&mut self, outcome: &MoveOutcome) {
        if outcome.bounced() {
            self.bounces += 1;
        }
        match outcome.teleport.map(|t| t.kind) {
            Some(TeleportKind::Snake) => self.snakes_hit += 1,
            Some(TeleportKind::Ladder) => self.ladders_climbed += 1,
            None => {}
        }
    }

    /// How many times `dice` was rolled.
    #[must_use]
    pub fn face_count(&self, dice: DiceValue) -> u32 {
        self.dice_distribution[usize::from(dice.value()) - 1]
    }

    /// Mean roll, or 0 before the first roll.
    #[must_use]
    pub fn average_roll(&self) -> f64 {
        if self.total_dice_rolls == 0 {
            return 0.0;
        }
        let sum: u32 = self
            .dice_distribution
            .iter()
            .zip(1u32..)
            .map(|(count, face)| count * face)
            .sum();
        f64::from(sum) / f64::from(self.total_dice_rolls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, PlayerMap, Square};
    use crate::rules::Rules;

    fn dv(face: u32) -> DiceValue {
        DiceValue::new(face).unwrap()
    }

    #[test]
    fn test_record_roll() {
        let mut stats = GameStats::new();
        stats.record_roll(dv(3));
        stats.record_roll(dv(6));
        stats.record_roll(dv(3));

        assert_eq!(stats.total_dice_rolls, 3);
        assert_eq!(stats.face_count(dv(3)), 2);
        assert_eq!(stats.face_count(dv(6)), 1);
        assert_eq!(stats.longest_roll, Some(6));
        assert_eq!(stats.shortest_roll, Some(3));
        assert!((stats.average_roll() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_move_counts_teleports_and_bounces() {
        let rules = Rules::standard();
        let mut positions = PlayerMap::from_vec(vec![Square(1), Square(25), Square(98)]).unwrap();
        let mut stats = GameStats::new();

        let ladder = rules.move_player(&mut positions, PlayerId(0), dv(1)).unwrap();
        let snake = rules.move_player(&mut positions, PlayerId(1), dv(2)).unwrap();
        let bounce = rules.move_player(&mut positions, PlayerId(2), dv(5)).unwrap();
        for outcome in [&ladder, &snake, &bounce] {
            stats.record_move(outcome);
        }

        assert_eq!(stats.ladders_climbed, 1);
        assert_eq!(stats.snakes_hit, 1);
        assert_eq!(stats.bounces, 1);
        assert_eq!(stats.total_dice_rolls, 0);
    }

    #[test]
    fn test_empty_and_reset() {
        let mut stats = GameStats::new();
        assert_eq!(stats.average_roll(), 0.0);
        assert_eq!(stats.longest_roll, None);

        stats.record_roll(dv(2));
        stats.reset();
        assert_eq!(stats, GameStats::default());
    }
}
