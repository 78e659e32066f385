//! # Rakshak
//!
//! Maze rescue robot simulation: a robot enters a grid maze, searches it
//! depth-first for a single occupant, collects it and carries it back to the
//! entrance.
//!
//! ## Overview
//!
//! - **Grid**: parsed maze text with entrance and occupant landmarks
//! - **Sensors**: front/left/right readings relative to the robot's heading
//! - **Robot**: turn, move, pickup and eject, each guarded by safety alarms
//! - **Exploration**: depth-first search with logged physical backtracking
//! - **Mission**: return phase, action log and the end-to-end runner
//!
//! ## Quick Start
//!
//! ```rust
//! use rakshak::{Command, Mission};
//!
//! let report = Mission::parse("E..\n.X@", "quickstart")?.run()?;
//! assert!(report.is_rescued());
//! assert_eq!(report.log.records()[0].command, Command::PowerOn);
//! # Ok::<(), rakshak::MissionError>(())
//! ```
//!
//! ## Alarms
//!
//! Every robot action validates before it mutates anything. A violated
//! safety rule raises an [`Alarm`] that aborts the whole mission; nothing is
//! retried.
//!
//! ## Coordinate System
//!
//! `(row, col)` with row 0 at the top. North decreases the row, East
//! increases the column.

#![warn(missing_docs)]

// Core types
pub mod core;

// Maze storage, reachability, rendering
pub mod grid;

// Sensor model
pub mod sensors;

// Robot state machine and visualization hook
pub mod robot;

// Depth-first search
pub mod exploration;

// Log, return phase, runner
pub mod mission;

// Configuration
pub mod config;

// Error types
pub mod error;

pub use crate::config::ExplorationConfig;
pub use crate::core::{CellType, GridCoord, Heading};
pub use crate::error::{Alarm, ConfigError, MazeError, MissionError, Result};
pub use crate::exploration::{ExplorationState, Explorer};
pub use crate::grid::GridMap;
pub use crate::mission::{
    Command, LOG_HEADER, Mission, MissionLog, MissionOutcome, MissionRecord, MissionReport,
    ReturnController,
};
pub use crate::robot::{FrameRecorder, MissionObserver, NullObserver, Robot};
pub use crate::sensors::{SensorFrame, SensorReading, SensorSide, read_sensors};
