//! Breadth-first reachability over the maze floor.

use std::collections::{HashSet, VecDeque};

use crate::core::GridCoord;

use super::GridMap;

impl GridMap {
    /// Is there a 4-connected path from `from` to `to` through non-wall cells?
    ///
    /// Free, entrance and occupant cells are all passable, so the answer is the
    /// same whether or not the occupant has already been lifted from its cell.
    /// The search runs over the current grid state.
    pub fn path_exists(&self, from: GridCoord, to: GridCoord) -> bool {
        if from == to {
            return true;
        }

        let mut visited = HashSet::with_capacity(self.cell_count());
        let mut queue = VecDeque::new();
        visited.insert(from);
        queue.push_back(from);

        while let Some(coord) = queue.pop_front() {
            for neighbor in coord.neighbors_4() {
                if !self.cell_at(neighbor).is_passable() || !visited.insert(neighbor) {
                    continue;
                }
                if neighbor == to {
                    return true;
                }
                queue.push_back(neighbor);
            }
        }

        false
    }

    /// Is the entrance reachable from `from`?
    #[inline]
    pub fn exit_reachable_from(&self, from: GridCoord) -> bool {
        self.path_exists(from, self.entrance())
    }
}
