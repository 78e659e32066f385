//! End-to-end mission execution.

use log::{info, warn};

use crate::config::ExplorationConfig;
use crate::core::{GridCoord, Heading};
use crate::error::{Alarm, MissionError, Result};
use crate::exploration::{ExplorationState, Explorer};
use crate::grid::GridMap;
use crate::robot::{MissionObserver, NullObserver, Robot};

use super::record::MissionLog;
use super::return_home::ReturnController;

/// How a mission that raised no alarm ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionOutcome {
    /// Occupant collected and ejected at the entrance
    Rescued {
        /// Cell the occupant was collected from
        pickup: GridCoord,
    },
    /// Every reachable cell searched; nothing to rescue
    OccupantNotFound,
}

/// Result of a completed mission.
#[derive(Clone, Debug)]
pub struct MissionReport {
    /// Mission identifier supplied by the caller
    pub id: String,
    /// How the mission ended
    pub outcome: MissionOutcome,
    /// Every record appended during the mission
    pub log: MissionLog,
    /// Entrance-to-pickup path used for the return
    pub path: Vec<GridCoord>,
    /// Final robot position
    pub position: GridCoord,
    /// Final robot heading
    pub heading: Heading,
    /// Final maze state
    pub grid: GridMap,
}

impl MissionReport {
    /// Was the occupant delivered to the entrance?
    pub fn is_rescued(&self) -> bool {
        matches!(self.outcome, MissionOutcome::Rescued { .. })
    }
}

/// One rescue mission on one maze.
///
/// # Example
///
/// ```
/// use rakshak::{Mission, MissionOutcome};
///
/// let report = Mission::parse("E.\n.@", "demo")?.run()?;
/// assert!(matches!(report.outcome, MissionOutcome::Rescued { .. }));
/// # Ok::<(), rakshak::MissionError>(())
/// ```
pub struct Mission<O: MissionObserver = NullObserver> {
    id: String,
    robot: Robot<O>,
    explorer: Explorer,
}

impl Mission<NullObserver> {
    /// Create a mission with default exploration settings.
    pub fn new(grid: GridMap, id: impl Into<String>) -> Self {
        Self::with_observer(grid, id, NullObserver)
    }

    /// Parse maze text and create a mission.
    pub fn parse(text: &str, id: impl Into<String>) -> Result<Self> {
        Ok(Self::new(GridMap::parse(text)?, id))
    }
}

impl<O: MissionObserver> Mission<O> {
    /// Create a mission that reports every frame to `observer`.
    pub fn with_observer(grid: GridMap, id: impl Into<String>, observer: O) -> Self {
        Self {
            id: id.into(),
            robot: Robot::with_observer(grid, observer),
            explorer: Explorer::default(),
        }
    }

    /// Replace the exploration settings.
    pub fn with_config(mut self, config: ExplorationConfig) -> Result<Self> {
        self.explorer = Explorer::new(config)?;
        Ok(self)
    }

    /// Run exploration, then the return phase if the occupant was found.
    ///
    /// Any alarm aborts the mission and is returned as
    /// [`MissionError::Alarm`]; records appended before the alarm are lost
    /// with the robot.
    pub fn run(self) -> Result<MissionReport> {
        let Self {
            id,
            mut robot,
            mut explorer,
        } = self;
        info!("Mission {} started", id);

        let outcome = match drive(&mut robot, &mut explorer) {
            Ok(outcome) => outcome,
            Err(alarm) => {
                warn!("Mission {} aborted [{}]: {}", id, alarm.code(), alarm);
                return Err(MissionError::Alarm(alarm));
            }
        };

        match outcome {
            MissionOutcome::Rescued { pickup } => {
                info!("Mission {} complete: occupant from {} rescued", id, pickup)
            }
            MissionOutcome::OccupantNotFound => {
                warn!("Mission {} complete: no occupant found", id)
            }
        }

        let parts = robot.into_parts();
        Ok(MissionReport {
            id,
            outcome,
            log: parts.log,
            path: parts.path,
            position: parts.position,
            heading: parts.heading,
            grid: parts.grid,
        })
    }
}

fn drive<O: MissionObserver>(
    robot: &mut Robot<O>,
    explorer: &mut Explorer,
) -> std::result::Result<MissionOutcome, Alarm> {
    match explorer.run(robot)? {
        ExplorationState::OccupantSecured { pickup } => {
            ReturnController::new().run(robot)?;
            Ok(MissionOutcome::Rescued { pickup })
        }
        _ => Ok(MissionOutcome::OccupantNotFound),
    }
}
