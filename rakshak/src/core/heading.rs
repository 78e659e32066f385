//! Cardinal headings and the fixed direction-vector table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::GridCoord;

/// Unit vectors (row delta, column delta) indexed by heading.
///
/// Order is clockwise starting at North, so turning right is `+1 mod 4`.
const DELTAS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// One of the four cardinal facings of the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heading {
    /// Towards row 0
    #[default]
    North = 0,
    /// Towards increasing columns
    East = 1,
    /// Towards increasing rows
    South = 2,
    /// Towards column 0
    West = 3,
}

impl Heading {
    /// All headings in clockwise order starting at North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading for a table index (taken modulo 4).
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Position of this heading in the clockwise table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit vector for this heading.
    #[inline]
    pub fn delta(self) -> GridCoord {
        let (row, col) = DELTAS[self.index()];
        GridCoord::new(row, col)
    }

    /// Heading whose unit vector equals `delta`, if any.
    pub fn from_delta(delta: GridCoord) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.delta() == delta)
    }

    /// Heading after one 90° clockwise turn.
    #[inline]
    pub fn turned_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Heading after one 90° counter-clockwise turn.
    #[inline]
    pub fn turned_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Heading facing the other way.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Number of single clockwise steps needed to go from `self` to `target`.
    #[inline]
    pub fn clockwise_turns_to(self, target: Heading) -> usize {
        (target.index() + 4 - self.index()) % 4
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turning_is_cyclic() {
        let mut h = Heading::North;
        for _ in 0..4 {
            h = h.turned_right();
        }
        assert_eq!(h, Heading::North);
        assert_eq!(Heading::North.turned_left(), Heading::West);
        assert_eq!(Heading::West.turned_right(), Heading::North);
        assert_eq!(Heading::East.opposite(), Heading::West);
    }

    #[test]
    fn test_clockwise_turn_count() {
        assert_eq!(Heading::North.clockwise_turns_to(Heading::North), 0);
        assert_eq!(Heading::North.clockwise_turns_to(Heading::East), 1);
        assert_eq!(Heading::North.clockwise_turns_to(Heading::West), 3);
        assert_eq!(Heading::West.clockwise_turns_to(Heading::North), 1);
        assert_eq!(Heading::East.clockwise_turns_to(Heading::West), 2);
    }

    #[test]
    fn test_delta_roundtrip() {
        for h in Heading::ALL {
            assert_eq!(Heading::from_delta(h.delta()), Some(h));
        }
        assert_eq!(Heading::from_delta(GridCoord::new(1, 1)), None);
        assert_eq!(Heading::from_delta(GridCoord::new(0, 0)), None);
    }

    #[test]
    fn test_deserialize_from_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            heading: Heading,
        }
        let w: Wrapper = toml::from_str("heading = \"South\"").unwrap();
        assert_eq!(w.heading, Heading::South);
    }
}
