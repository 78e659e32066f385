//! Three-direction proximity sensor model.
//!
//! The robot carries three sensors, each looking one cell away:
//!
//! ```text
//!            front
//!              ↑
//!     left  ←  R  →  right
//! ```
//!
//! Left and right are 90° counter-clockwise and clockwise from the current
//! heading. Readings are a pure function of pose and grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{CellType, GridCoord, Heading};
use crate::grid::GridMap;

/// Classification reported by a single sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorReading {
    /// Wall or outside the maze
    Wall,
    /// The occupant is in that cell
    Occupant,
    /// Free floor or the entrance
    Empty,
}

impl SensorReading {
    /// Classify a cell type.
    #[inline]
    pub fn classify(cell: CellType) -> Self {
        match cell {
            CellType::Wall => SensorReading::Wall,
            CellType::Occupant => SensorReading::Occupant,
            CellType::Free | CellType::Entrance => SensorReading::Empty,
        }
    }

    /// Label written to mission logs.
    pub fn label(self) -> &'static str {
        match self {
            SensorReading::Wall => "WALL",
            SensorReading::Occupant => "OCCUPANT",
            SensorReading::Empty => "EMPTY",
        }
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which of the three sensors a reading came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorSide {
    /// Straight ahead
    Front,
    /// 90° counter-clockwise
    Left,
    /// 90° clockwise
    Right,
}

impl SensorSide {
    /// Sensors in reporting order.
    pub const ALL: [SensorSide; 3] = [SensorSide::Front, SensorSide::Left, SensorSide::Right];

    /// Absolute heading this sensor looks along when the robot faces `heading`.
    #[inline]
    pub fn resolve(self, heading: Heading) -> Heading {
        match self {
            SensorSide::Front => heading,
            SensorSide::Left => heading.turned_left(),
            SensorSide::Right => heading.turned_right(),
        }
    }
}

/// One simultaneous reading of all three sensors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorFrame {
    /// Reading straight ahead
    pub front: SensorReading,
    /// Reading to the left
    pub left: SensorReading,
    /// Reading to the right
    pub right: SensorReading,
}

impl SensorFrame {
    /// Reading for one side.
    #[inline]
    pub fn get(&self, side: SensorSide) -> SensorReading {
        match side {
            SensorSide::Front => self.front,
            SensorSide::Left => self.left,
            SensorSide::Right => self.right,
        }
    }

    /// First side (front, left, right) that reports the occupant.
    pub fn occupant_side(&self) -> Option<SensorSide> {
        SensorSide::ALL
            .into_iter()
            .find(|&side| self.get(side) == SensorReading::Occupant)
    }
}

/// Read all three sensors for a robot at `position` facing `heading`.
pub fn read_sensors(position: GridCoord, heading: Heading, grid: &GridMap) -> SensorFrame {
    let look = |side: SensorSide| {
        SensorReading::classify(grid.cell_at(position.step(side.resolve(heading))))
    };
    let frame = SensorFrame {
        front: look(SensorSide::Front),
        left: look(SensorSide::Left),
        right: look(SensorSide::Right),
    };
    log::trace!(
        "sensors at {} facing {}: front={} left={} right={}",
        position,
        heading,
        frame.front,
        frame.left,
        frame.right
    );
    frame
}
