//! ASCII frame rendering for visualization hooks.

use crate::core::{CellType, GridCoord};

use super::GridMap;

/// Symbol drawn at the robot's position.
pub const ROBOT_CHAR: char = 'R';

impl GridMap {
    /// Render the maze as text with the robot overlaid.
    ///
    /// When `occupant_visible` is false the occupant cell is drawn as floor,
    /// which is how a frame looks while the occupant rides on the robot.
    pub fn render(&self, robot: GridCoord, occupant_visible: bool) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for (coord, cell) in self.iter() {
            if coord.col == 0 && coord.row > 0 {
                out.push('\n');
            }
            let c = if coord == robot {
                ROBOT_CHAR
            } else if cell == CellType::Occupant && !occupant_visible {
                CellType::Free.as_char()
            } else {
                cell.as_char()
            };
            out.push(c);
        }
        out
    }
}
