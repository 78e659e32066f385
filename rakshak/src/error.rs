//! Error types for rakshak.
//!
//! Every [`Alarm`] is fatal: it aborts the mission at the point of detection
//! and is never retried. Drivers should match on the variant (or on
//! [`Alarm::code`]) rather than on display text.

use crate::core::GridCoord;

/// Result type alias for mission-level operations.
pub type Result<T> = std::result::Result<T, MissionError>;

/// Safety alarms raised by the robot state machine and return controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Alarm {
    /// Attempted move into a wall or out-of-bounds cell.
    #[error("ALARM: attempted collision with wall at {target}")]
    WallCollision {
        /// Cell the robot tried to enter
        target: GridCoord,
    },

    /// Attempted move onto the occupant while already carrying a payload.
    #[error("ALARM: attempted to run over the occupant at {target}")]
    OccupantCollision {
        /// Cell the robot tried to enter
        target: GridCoord,
    },

    /// Pickup attempted on a cell without the occupant.
    #[error("ALARM: pickup attempted at {target} but no occupant is there")]
    NoOccupantToPickup {
        /// Cell that was expected to hold the occupant
        target: GridCoord,
    },

    /// The occupant was found but no path leads back to the entrance.
    #[error("ALARM: dead end, no path from {from} back to the entrance")]
    DeadEnd {
        /// Pickup cell the reachability search started from
        from: GridCoord,
    },

    /// Ejection attempted while not carrying the occupant.
    #[error("ALARM: ejection attempted without an occupant on board")]
    EjectWithoutPayload,

    /// Ejection attempted while the entrance is not directly ahead.
    #[error("ALARM: ejection only allowed facing the exit, robot faces {facing}")]
    EjectNotFacingExit {
        /// Cell directly in front of the robot
        facing: GridCoord,
    },

    /// Return phase ended with the robot not adjacent to the entrance.
    #[error("ALARM: {position} is not a valid ejection position (not adjacent to the entrance)")]
    InvalidEjectPosition {
        /// Where the robot stopped
        position: GridCoord,
    },
}

impl Alarm {
    /// Short stable code for logging and mission summaries.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WallCollision { .. } => "WALL_COLLISION",
            Self::OccupantCollision { .. } => "OCCUPANT_COLLISION",
            Self::NoOccupantToPickup { .. } => "NO_OCCUPANT_TO_PICKUP",
            Self::DeadEnd { .. } => "DEAD_END",
            Self::EjectWithoutPayload => "EJECT_WITHOUT_PAYLOAD",
            Self::EjectNotFacingExit { .. } => "EJECT_NOT_FACING_EXIT",
            Self::InvalidEjectPosition { .. } => "INVALID_EJECT_POSITION",
        }
    }
}

/// Errors found while parsing maze text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// No non-blank lines in the input.
    #[error("maze text is empty")]
    Empty,

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        found: usize,
    },

    /// No `E` symbol anywhere in the maze.
    #[error("maze has no entrance ('E')")]
    MissingEntrance,

    /// More than one `E` symbol.
    #[error("maze has more than one entrance: {first} and {second}")]
    MultipleEntrances {
        /// First entrance found (row-major order)
        first: GridCoord,
        /// Second entrance found
        second: GridCoord,
    },

    /// More than one `@` symbol.
    #[error("maze has more than one occupant: {first} and {second}")]
    MultipleOccupants {
        /// First occupant found (row-major order)
        first: GridCoord,
        /// Second occupant found
        second: GridCoord,
    },
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Search order must list each heading exactly once.
    #[error("search order must be a permutation of North, East, South, West (got {0})")]
    InvalidSearchOrder(String),
}

/// Top-level mission error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    /// The maze could not be loaded.
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),

    /// The mission was configured with invalid values.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A safety alarm aborted the mission.
    #[error(transparent)]
    Alarm(#[from] Alarm),
}

impl MissionError {
    /// The alarm that aborted the mission, if that is what happened.
    pub fn alarm(&self) -> Option<&Alarm> {
        match self {
            Self::Alarm(alarm) => Some(alarm),
            Self::Maze(_) | Self::Config(_) => None,
        }
    }
}
