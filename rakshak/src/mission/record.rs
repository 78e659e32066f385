//! Append-only mission log.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sensors::SensorFrame;

/// Column headers for tabular exports of the log.
pub const LOG_HEADER: [&str; 5] = ["Command", "Front", "Left", "Right", "Payload"];

/// State-changing action recorded in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Robot switched on at the entrance
    PowerOn,
    /// One 90° clockwise turn
    Turn,
    /// One cell forward
    Move,
    /// Occupant collected
    Pickup,
    /// Occupant released at the entrance
    Eject,
}

impl Command {
    /// Token written to mission logs.
    pub fn token(self) -> &'static str {
        match self {
            Command::PowerOn => "POWER_ON",
            Command::Turn => "TURN",
            Command::Move => "MOVE",
            Command::Pickup => "PICKUP",
            Command::Eject => "EJECT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One log line: the command plus the sensor state right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRecord {
    /// What the robot just did
    pub command: Command,
    /// Sensor readings taken after the action
    pub sensors: SensorFrame,
    /// Whether the occupant is on board after the action
    pub carrying: bool,
}

impl MissionRecord {
    /// Payload label written to mission logs.
    pub fn payload_label(&self) -> &'static str {
        if self.carrying { "carrying" } else { "empty" }
    }

    /// The record as the five log columns, in [`LOG_HEADER`] order.
    pub fn fields(&self) -> [&'static str; 5] {
        [
            self.command.token(),
            self.sensors.front.label(),
            self.sensors.left.label(),
            self.sensors.right.label(),
            self.payload_label(),
        ]
    }
}

/// Ordered mission records, in the order the actions happened.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionLog {
    records: Vec<MissionRecord>,
}

impl MissionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: MissionRecord) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the log empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first
    pub fn records(&self) -> &[MissionRecord] {
        &self.records
    }

    /// Most recent record
    pub fn last(&self) -> Option<&MissionRecord> {
        self.records.last()
    }

    /// Iterate over records, oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, MissionRecord> {
        self.records.iter()
    }

    /// Command sequence, oldest first
    pub fn commands(&self) -> Vec<Command> {
        self.records.iter().map(|r| r.command).collect()
    }

    /// How many times `command` appears
    pub fn count(&self, command: Command) -> usize {
        self.records.iter().filter(|r| r.command == command).count()
    }
}

impl<'a> IntoIterator for &'a MissionLog {
    type Item = &'a MissionRecord;
    type IntoIter = std::slice::Iter<'a, MissionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
