//! Occupant search.
//!
//! The [`Explorer`] runs a depth-first search over the maze using only the
//! robot's sensors and its move/turn/pickup primitives. At every cell it:
//!
//! 1. Marks the cell visited
//! 2. Collects the occupant frontally if any sensor sees it in an unvisited cell
//! 3. Collects the occupant underfoot if standing on it
//! 4. Tries neighbours in the configured order, backtracking physically
//!    out of branches that lead nowhere
//!
//! The cells entered and not backtracked from form the robot's recorded
//! path, which the return phase replays in reverse.

mod explorer;
mod state;

pub use explorer::Explorer;
pub use state::ExplorationState;
