//! Snake and ladder lookup.
//!
//! Built once from a validated `BoardConfig` and never mutated afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, EngineResult, Square, TeleportLink};

/// Which kind of link moved the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeleportKind {
    Snake,
    Ladder,
}

/// A teleport that fired: the player landed on `from` and rests on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Teleport {
    pub kind: TeleportKind,
    pub from: Square,
    pub to: Square,
}

/// Immutable snake and ladder tables.
#[derive(Clone, Debug, Default)]
pub struct TeleportTable {
    snakes: FxHashMap<Square, Square>,
    ladders: FxHashMap<Square, Square>,
}

impl TeleportTable {
    /// Build the table from a configuration, validating it first.
    pub fn from_config(config: &BoardConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Build the table from a configuration already known to be valid.
    pub(crate) fn from_validated(config: &BoardConfig) -> Self {
        let collect = |links: &[TeleportLink]| {
            links
                .iter()
                .map(|link| (Square(link.from), Square(link.to)))
                .collect::<FxHashMap<_, _>>()
        };

        Self {
            snakes: collect(&config.snakes),
            ladders: collect(&config.ladders),
        }
    }

    /// Look up the teleport starting on `square`.
    ///
    /// Snakes are checked before ladders; a validated table never has both.
    #[must_use]
    pub fn lookup(&self, square: Square) -> Option<Teleport> {
        if let Some(&to) = self.snakes.get(&square) {
            return Some(Teleport {
                kind: TeleportKind::Snake,
                from: square,
                to,
            });
        }
        self.ladders.get(&square).map(|&to| Teleport {
            kind: TeleportKind::Ladder,
            from: square,
            to,
        })
    }

    /// Destination of the teleport starting on `square`, if any.
    #[must_use]
    pub fn destination(&self, square: Square) -> Option<Square> {
        self.lookup(square).map(|teleport| teleport.to)
    }

    /// Number of snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// All teleports, snakes first, each group ordered by starting square.
    #[must_use]
    pub fn teleports(&self) -> Vec<Teleport> {
        let mut snakes: Vec<_> = self
            .snakes
            .keys()
            .filter_map(|&square| self.lookup(square))
            .collect();
        let mut ladders: Vec<_> = self
            .ladders
            .keys()
            .filter_map(|&square| self.lookup(square))
            .collect();
        snakes.sort_by_key(|t| t.from);
        ladders.sort_by_key(|t| t.from);
        snakes.extend(ladders);
        snakes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    #[test]
    fn test_standard_lookups() {
        let table = TeleportTable::from_config(&BoardConfig::standard()).unwrap();

        assert_eq!(table.destination(Square(27)), Some(Square(5)));
        assert_eq!(table.destination(Square(99)), Some(Square(41)));
        assert_eq!(table.destination(Square(2)), Some(Square(23)));
        assert_eq!(table.destination(Square(74)), Some(Square(92)));
        assert_eq!(table.destination(Square(1)), None);
        assert_eq!(table.destination(Square(50)), None);
    }

    #[test]
    fn test_lookup_reports_kind() {
        let table = TeleportTable::from_config(&BoardConfig::standard()).unwrap();

        assert_eq!(
            table.lookup(Square(40)),
            Some(Teleport { kind: TeleportKind::Snake, from: Square(40), to: Square(3) })
        );
        assert_eq!(
            table.lookup(Square(41)),
            Some(Teleport { kind: TeleportKind::Ladder, from: Square(41), to: Square(79) })
        );
    }

    #[test]
    fn test_counts_and_listing() {
        let table = TeleportTable::from_config(&BoardConfig::standard()).unwrap();

        assert_eq!(table.snake_count(), 7);
        assert_eq!(table.ladder_count(), 6);

        let all = table.teleports();
        assert_eq!(all.len(), 13);
        assert_eq!(all[0].from, Square(27));
        assert_eq!(all[6].from, Square(99));
        assert_eq!(all[7], Teleport { kind: TeleportKind::Ladder, from: Square(2), to: Square(23) });
    }

    #[test]
    fn test_lookup_does_not_follow_chains() {
        let table = TeleportTable::from_config(&BoardConfig::standard()).unwrap();

        // 20 and 99 both land on 41, itself the foot of the 41 -> 79 ladder
        assert_eq!(table.destination(Square(20)), Some(Square(41)));
        assert_eq!(table.destination(Square(99)), Some(Square(41)));
        assert_eq!(table.destination(Square(41)), Some(Square(79)));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BoardConfig::empty(10).with_snake(10, 20);
        assert!(matches!(
            TeleportTable::from_config(&config),
            Err(EngineError::InvalidTeleport { .. })
        ));
    }
}
