//! Maze coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::heading::Heading;

/// Maze cell coordinate (row, column).
///
/// Rows grow downwards (south) and columns grow to the right (east), matching
/// the line/character layout of the maze text. Coordinates are signed so that
/// cells just outside the grid can be expressed and classified as wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (0 = first line of the maze text)
    pub row: i32,
    /// Column index (0 = first character of a line)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighbouring coordinate one cell away in `heading`.
    #[inline]
    pub fn step(self, heading: Heading) -> Self {
        self + heading.delta()
    }

    /// Get the 4 cardinal neighbours in N, E, S, W order
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        Heading::ALL.map(|h| self.step(h))
    }

    /// Heading that leads from `self` to an adjacent `other`.
    ///
    /// Returns `None` when the two cells are not 4-connected neighbours.
    #[inline]
    pub fn heading_to(&self, other: &GridCoord) -> Option<Heading> {
        Heading::from_delta(*other - *self)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
