//! Shared fixtures for mission integration tests.

#![allow(dead_code)]

use rakshak::{ExplorationState, Explorer, GridMap, MissionLog, Robot};

/// Straight corridor, occupant three cells east of the entrance.
pub const CORRIDOR_EAST: &str = "E..@";

/// Vertical corridor, entrance at the bottom.
pub const CORRIDOR_NORTH: &str = "@\n.\n.\nE";

/// Walled maze with one dead branch before the occupant.
pub const BRANCHING: &str = "\
XXXXXXX
XE..X.X
X.X...X
X.X.X.X
X...X@X
XXXXXXX
";

/// Open floor, no occupant anywhere.
pub const EMPTY_ROOM: &str = "\
XXXXX
XE..X
X...X
X...X
XXXXX
";

/// Enable log output for `cargo test -- --nocapture`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Log command tokens in order.
pub fn tokens(log: &MissionLog) -> Vec<&'static str> {
    log.iter().map(|r| r.command.token()).collect()
}

/// Run exploration only, with default settings.
pub fn explore(maze: &str) -> (Robot, ExplorationState) {
    let mut robot = Robot::new(GridMap::parse(maze).expect("valid maze"));
    let mut explorer = Explorer::default();
    let state = explorer.run(&mut robot).expect("exploration raised an alarm");
    (robot, state)
}
