//! Board configuration.
//!
//! The board is defined by data, not code:
//! - `board_size`: side length of the square grid (10 for the classic board)
//! - `tile_size`: world-space width of one tile, used for path coordinates
//! - `snakes` / `ladders`: teleport links between squares
//!
//! `BoardConfig::standard()` is the classic 10x10 board. Other layouts can be
//! built with the `with_*` methods or read from TOML:
//!
//! ```toml
//! board_size = 10
//! tile_size = 1.0
//!
//! [[snakes]]
//! from = 27
//! to = 5
//!
//! [[ladders]]
//! from = 2
//! to = 23
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::{EngineError, EngineResult};

/// Side length of the classic board.
pub const BOARD_SIZE: u16 = 10;

/// Number of squares on the classic board.
pub const TOTAL_SQUARES: u16 = BOARD_SIZE * BOARD_SIZE;

/// Classic snakes as (head, tail).
pub const STANDARD_SNAKES: [(u16, u16); 7] = [
    (27, 5),
    (40, 3),
    (54, 31),
    (66, 45),
    (76, 58),
    (89, 53),
    (99, 41),
];

/// Classic ladders as (foot, top).
pub const STANDARD_LADDERS: [(u16, u16); 6] = [(2, 23), (8, 34), (20, 41), (32, 51), (41, 79), (74, 92)];

/// A single snake or ladder: landing on `from` moves the player to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeleportLink {
    pub from: u16,
    pub to: u16,
}

impl TeleportLink {
    #[must_use]
    pub const fn new(from: u16, to: u16) -> Self {
        Self { from, to }
    }
}

/// Complete board configuration.
///
/// Missing TOML keys fall back to the classic board's values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length of the grid (2-255).
    pub board_size: u16,

    /// Width of one tile in path coordinates.
    pub tile_size: f32,

    /// Snakes: each link must go down the board.
    pub snakes: Vec<TeleportLink>,

    /// Ladders: each link must go up the board.
    pub ladders: Vec<TeleportLink>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardConfig {
    /// The classic 10x10 board with 7 snakes and 6 ladders.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tile_size: 1.0,
            snakes: STANDARD_SNAKES.iter().map(|&(from, to)| TeleportLink::new(from, to)).collect(),
            ladders: STANDARD_LADDERS.iter().map(|&(from, to)| TeleportLink::new(from, to)).collect(),
        }
    }

    /// A board of the given size with no snakes or ladders.
    #[must_use]
    pub fn empty(board_size: u16) -> Self {
        Self {
            board_size,
            tile_size: 1.0,
            snakes: Vec::new(),
            ladders: Vec::new(),
        }
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, board_size: u16) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set the tile size used for path coordinates.
    #[must_use]
    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Add a snake from `head` down to `tail`.
    #[must_use]
    pub fn with_snake(mut self, head: u16, tail: u16) -> Self {
        self.snakes.push(TeleportLink::new(head, tail));
        self
    }

    /// Add a ladder from `foot` up to `top`.
    #[must_use]
    pub fn with_ladder(mut self, foot: u16, top: u16) -> Self {
        self.ladders.push(TeleportLink::new(foot, top));
        self
    }

    /// Number of squares on the board.
    ///
    /// Only meaningful once `validate` has accepted `board_size`.
    #[must_use]
    pub fn total_squares(&self) -> u16 {
        self.board_size.saturating_mul(self.board_size)
    }

    /// Parse a configuration from TOML text. The result is validated.
    pub fn from_toml_str(contents: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file. The result is validated.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check the board dimensions and teleport table invariants.
    ///
    /// - `board_size` in 2..=255 and a positive finite `tile_size`
    /// - every endpoint on the board
    /// - snakes go down, ladders go up
    /// - nothing leaves the final square
    /// - no square starts two links
    ///
    /// A link may land on the start of another link (the classic board sends
    /// both 20 and 99 to 41, the foot of a ladder). Moves never chain, so the
    /// player stays on the landing square until their next roll.
    pub fn validate(&self) -> EngineResult<()> {
        if !(2..=255).contains(&self.board_size) {
            return Err(EngineError::InvalidBoardSize(self.board_size));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(EngineError::InvalidTileSize(self.tile_size));
        }

        let total = self.total_squares();
        let mut sources = FxHashSet::default();

        let links = self
            .snakes
            .iter()
            .map(|link| (link, true))
            .chain(self.ladders.iter().map(|link| (link, false)));

        for (link, is_snake) in links {
            let invalid = |reason| EngineError::InvalidTeleport {
                from: link.from,
                to: link.to,
                reason,
            };

            if link.from == 0 || link.from > total || link.to == 0 || link.to > total {
                return Err(invalid("endpoint is off the board"));
            }
            if is_snake && link.to >= link.from {
                return Err(invalid("snake must go down"));
            }
            if !is_snake && link.to <= link.from {
                return Err(invalid("ladder must go up"));
            }
            if link.from == total {
                return Err(invalid("final square cannot teleport"));
            }
            if !sources.insert(link.from) {
                return Err(invalid("square already starts another snake or ladder"));
            }
        }

        Ok(())
    }
}
