//! Boustrophedon board path.
//!
//! Square 1 sits in the corner at row 0, column 0. Even rows run left to
//! right and odd rows run right to left, so consecutive squares are always
//! adjacent tiles. Each square maps to the centre of its tile on the y = 0
//! plane: `(column + 0.5, 0, row + 0.5) * tile_size`.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, Square};

/// Centre of a tile in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Row and column of a square on the grid (both 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u16,
    pub column: u16,
}

/// Ordered tile centres, one per square.
///
/// Immutable once generated. Index 0 is square 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardPath {
    board_size: u16,
    points: Vec<PathPoint>,
}

/// Generate the path for a `board_size` x `board_size` board.
///
/// Pure: the same arguments always produce the same points.
///
/// ```
/// use snakes_ladders::board::{generate_path, PathPoint};
///
/// let path = generate_path(10, 1.0);
/// assert_eq!(path.len(), 100);
/// assert_eq!(path.points()[10], PathPoint::new(9.5, 0.0, 1.5));
/// ```
#[must_use]
pub fn generate_path(board_size: u16, tile_size: f32) -> BoardPath {
    let total = usize::from(board_size) * usize::from(board_size);
    let half = tile_size / 2.0;

    let points = (0..total)
        .map(|i| {
            let cell = cell_for_index(i, board_size);
            PathPoint::new(
                f32::from(cell.column) * tile_size + half,
                0.0,
                f32::from(cell.row) * tile_size + half,
            )
        })
        .collect();

    BoardPath { board_size, points }
}

fn cell_for_index(index: usize, board_size: u16) -> GridCell {
    let size = usize::from(board_size);
    let row = index / size;
    let offset = index % size;
    let column = if row % 2 == 0 { offset } else { size - 1 - offset };
    GridCell {
        row: row as u16,
        column: column as u16,
    }
}

impl BoardPath {
    /// Number of points (equal to the number of squares).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in square order.
    #[must_use]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Tile centre of a square, or `None` if the square is off this board.
    #[must_use]
    pub fn point(&self, square: Square) -> Option<PathPoint> {
        if square.value() == 0 {
            return None;
        }
        self.points.get(square.path_index()).copied()
    }

    /// Grid row and column of a square.
    pub fn grid_cell(&self, square: Square) -> EngineResult<GridCell> {
        self.check_square(square)?;
        Ok(cell_for_index(square.path_index(), self.board_size))
    }

    /// Square occupying the given grid cell.
    pub fn square_at(&self, cell: GridCell) -> EngineResult<Square> {
        let size = self.board_size;
        if cell.row >= size || cell.column >= size {
            return Err(EngineError::InvalidSquare {
                square: u32::from(cell.row) * u32::from(size) + u32::from(cell.column) + 1,
                total_squares: self.points.len() as u16,
            });
        }
        let offset = if cell.row % 2 == 0 {
            cell.column
        } else {
            size - 1 - cell.column
        };
        Ok(Square(cell.row * size + offset + 1))
    }

    fn check_square(&self, square: Square) -> EngineResult<()> {
        Square::new(u32::from(square.value()), self.points.len() as u16).map(|_| ())
    }
}
