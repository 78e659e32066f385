//! Cell types for the maze grid.

use serde::{Deserialize, Serialize};

/// Semantic cell type - what occupies a maze cell?
///
/// - `Entrance` - the single exit of the maze (`E`)
/// - `Occupant` - the trapped person (`@`)
/// - `Free` - open floor (`.`)
/// - `Wall` - any other symbol, and everything outside the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    /// Solid wall or out-of-bounds
    #[default]
    Wall = 0,

    /// Open floor
    Free = 1,

    /// The maze entrance / extraction point
    Entrance = 2,

    /// Cell currently holding the occupant
    Occupant = 3,
}

impl CellType {
    /// Parse a maze symbol. Unknown symbols are walls.
    #[inline]
    pub fn from_char(c: char) -> Self {
        match c {
            'E' => CellType::Entrance,
            '@' => CellType::Occupant,
            '.' => CellType::Free,
            _ => CellType::Wall,
        }
    }

    /// Symbol used when rendering the maze.
    pub fn as_char(self) -> char {
        match self {
            CellType::Wall => 'X',
            CellType::Free => '.',
            CellType::Entrance => 'E',
            CellType::Occupant => '@',
        }
    }

    /// Can the robot drive into this cell during exploration?
    #[inline]
    pub fn is_open_floor(self) -> bool {
        matches!(self, CellType::Free | CellType::Entrance)
    }

    /// Is this cell part of the connected floor (anything but wall)?
    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellType::Wall
    }
}
