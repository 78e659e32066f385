//! Return phase: retrace the recorded path and hand the occupant over.

use log::{debug, info};

use crate::error::Alarm;
use crate::robot::{MissionObserver, Robot};

/// Drives a loaded robot back to the entrance and ejects the occupant.
///
/// The recorded path is replayed in reverse, stopping one cell short of the
/// entrance: ejection needs the entrance directly ahead, so the robot must
/// end up next to it rather than on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReturnController;

impl ReturnController {
    /// Create a return controller
    pub fn new() -> Self {
        Self
    }

    /// Retrace, face the entrance and eject.
    ///
    /// # Errors
    ///
    /// [`Alarm::InvalidEjectPosition`] if the replay does not leave the robot
    /// next to the entrance (for instance when the occupant was collected
    /// from the entrance cell itself). Alarms raised by the robot's own
    /// actions propagate unchanged.
    pub fn run<O: MissionObserver>(&self, robot: &mut Robot<O>) -> Result<(), Alarm> {
        let entrance = robot.grid().entrance();
        let path = robot.recorded_path().to_vec();
        info!("Returning along {} recorded cells", path.len());

        // The last cell is where the robot already stands.
        let replay = path.split_last().map_or(&[][..], |(_, rest)| rest);
        for &target in replay.iter().rev() {
            if target == entrance {
                break;
            }
            let position = robot.position();
            let heading = position
                .heading_to(&target)
                .ok_or(Alarm::InvalidEjectPosition { position })?;
            debug!("Retrace {} -> {}", position, target);
            robot.move_to(target, heading)?;
        }

        let position = robot.position();
        let heading = position
            .heading_to(&entrance)
            .ok_or(Alarm::InvalidEjectPosition { position })?;
        robot.turn_to(heading);
        robot.eject()
    }
}
