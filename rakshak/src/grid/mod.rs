//! Maze grid: cell storage, landmarks, reachability and rendering.
//!
//! ## Maze Text Format
//!
//! ```text
//! XXXXX
//! XE..X      E  entrance (exactly one)
//! XX.XX      @  occupant (at most one)
//! X..@X      .  free floor
//! XXXXX      *  anything else is wall
//! ```
//!
//! Coordinates outside the parsed bounds are also wall, so sensors and
//! movement checks never need a separate bounds test.

mod reachability;
mod render;
mod storage;

pub use render::ROBOT_CHAR;
pub use storage::GridMap;
