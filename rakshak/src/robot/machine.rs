//! Robot state machine.

use std::collections::HashSet;

use log::{debug, info};

use crate::core::{CellType, GridCoord, Heading};
use crate::error::Alarm;
use crate::grid::GridMap;
use crate::mission::{Command, MissionLog, MissionRecord};
use crate::sensors::{SensorFrame, read_sensors};

use super::observer::{MissionObserver, NullObserver};

/// The rescue robot.
///
/// Owns the maze for the duration of a mission together with its pose,
/// payload flag, visited set, recorded path and mission log. Every
/// state-changing method validates first and only then mutates, so a failed
/// call leaves the robot exactly as it was. Every successful action appends
/// one log record whose sensor readings reflect the state after that action.
pub struct Robot<O: MissionObserver = NullObserver> {
    /// Maze being searched (only this robot mutates it)
    grid: GridMap,
    /// Current cell
    position: GridCoord,
    /// Current facing
    heading: Heading,
    /// Is the occupant on board?
    carrying: bool,
    /// Cells visited during exploration
    visited: HashSet<GridCoord>,
    /// Entrance followed by every cell moved to and not backtracked from
    path: Vec<GridCoord>,
    /// Mission records
    log: MissionLog,
    /// Visualization hook
    observer: O,
}

impl Robot<NullObserver> {
    /// Power on a robot at the maze entrance, facing North.
    pub fn new(grid: GridMap) -> Self {
        Self::with_observer(grid, NullObserver)
    }
}

impl<O: MissionObserver> Robot<O> {
    /// Power on a robot at the maze entrance with a visualization hook.
    ///
    /// Appends the `POWER_ON` record.
    pub fn with_observer(grid: GridMap, observer: O) -> Self {
        let entrance = grid.entrance();
        let mut robot = Self {
            grid,
            position: entrance,
            heading: Heading::North,
            carrying: false,
            visited: HashSet::new(),
            path: vec![entrance],
            log: MissionLog::new(),
            observer,
        };
        robot.record(Command::PowerOn);
        info!("Robot powered on at entrance {}", entrance);
        robot
    }

    // === Accessors ===

    /// The maze, in its current state
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// Current cell
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Current facing
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Is the occupant on board?
    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    /// Mission records so far
    pub fn log(&self) -> &MissionLog {
        &self.log
    }

    /// Recorded path, entrance first
    pub fn recorded_path(&self) -> &[GridCoord] {
        &self.path
    }

    /// The visualization hook
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Cell directly ahead
    pub fn facing_cell(&self) -> GridCoord {
        self.position.step(self.heading)
    }

    /// Current sensor readings
    pub fn sense(&self) -> SensorFrame {
        read_sensors(self.position, self.heading, &self.grid)
    }

    /// Consume the robot, returning its log, path, grid and observer.
    pub fn into_parts(self) -> RobotParts<O> {
        RobotParts {
            log: self.log,
            path: self.path,
            grid: self.grid,
            position: self.position,
            heading: self.heading,
            observer: self.observer,
        }
    }

    // === Exploration bookkeeping ===

    /// Mark a cell visited. Returns false if it already was.
    pub fn mark_visited(&mut self, coord: GridCoord) -> bool {
        self.visited.insert(coord)
    }

    /// Has the cell been visited?
    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.visited.contains(&coord)
    }

    /// Number of distinct cells visited
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Append a cell to the recorded path.
    pub fn push_waypoint(&mut self, coord: GridCoord) {
        self.path.push(coord);
    }

    /// Remove the most recent cell from the recorded path.
    ///
    /// The entrance at the head of the path is never removed.
    pub fn pop_waypoint(&mut self) -> Option<GridCoord> {
        if self.path.len() > 1 {
            self.path.pop()
        } else {
            None
        }
    }

    // === Actions ===

    /// Turn clockwise, one logged 90° step at a time, until facing `target`.
    ///
    /// Turning is always legal. Sensors are re-read after every step.
    pub fn turn_to(&mut self, target: Heading) {
        let turns = self.heading.clockwise_turns_to(target);
        for _ in 0..turns {
            self.heading = self.heading.turned_right();
            debug!("Turn -> {} at {}", self.heading, self.position);
            self.record(Command::Turn);
        }
    }

    /// Turn to `heading` and drive one cell into `target`.
    ///
    /// # Errors
    ///
    /// - [`Alarm::WallCollision`] if `target` is wall or outside the maze
    /// - [`Alarm::OccupantCollision`] if `target` shows the occupant while
    ///   the robot is already carrying one
    pub fn move_to(&mut self, target: GridCoord, heading: Heading) -> Result<(), Alarm> {
        match self.grid.cell_at(target) {
            CellType::Wall => return Err(Alarm::WallCollision { target }),
            CellType::Occupant if self.carrying => {
                return Err(Alarm::OccupantCollision { target });
            }
            _ => {}
        }

        self.turn_to(heading);
        self.position = target;
        debug!("Move -> {} facing {}", self.position, self.heading);
        self.notify();
        self.record(Command::Move);
        Ok(())
    }

    /// Collect the occupant from the cell the robot stands on.
    ///
    /// # Errors
    ///
    /// - [`Alarm::NoOccupantToPickup`] if the current cell has no occupant
    /// - [`Alarm::DeadEnd`] if the entrance is unreachable from here
    pub fn pickup_here(&mut self) -> Result<(), Alarm> {
        let target = self.position;
        self.check_pickup(target)?;
        self.lift(target);
        Ok(())
    }

    /// Collect the occupant from an adjacent cell without entering it.
    ///
    /// The robot turns to face `target`; its position does not change.
    ///
    /// # Errors
    ///
    /// - [`Alarm::NoOccupantToPickup`] if `target` has no occupant or is not
    ///   adjacent to the robot
    /// - [`Alarm::DeadEnd`] if the entrance is unreachable from `target`
    pub fn pickup_facing(&mut self, target: GridCoord) -> Result<(), Alarm> {
        let heading = self
            .position
            .heading_to(&target)
            .ok_or(Alarm::NoOccupantToPickup { target })?;
        self.check_pickup(target)?;

        self.turn_to(heading);
        self.lift(target);
        Ok(())
    }

    /// Release the occupant onto the entrance directly ahead.
    ///
    /// # Errors
    ///
    /// - [`Alarm::EjectWithoutPayload`] if nothing is on board
    /// - [`Alarm::EjectNotFacingExit`] if the entrance is not directly ahead
    pub fn eject(&mut self) -> Result<(), Alarm> {
        if !self.carrying {
            return Err(Alarm::EjectWithoutPayload);
        }
        let facing = self.facing_cell();
        if facing != self.grid.entrance() {
            return Err(Alarm::EjectNotFacingExit { facing });
        }

        self.grid.set_cell(facing, CellType::Occupant);
        self.carrying = false;
        info!("Occupant ejected at entrance {}", facing);
        self.notify();
        self.record(Command::Eject);
        Ok(())
    }

    /// Put the robot down on `position` without moving or logging.
    #[cfg(test)]
    pub(crate) fn place(&mut self, position: GridCoord) {
        self.position = position;
    }

    // === Internals ===

    fn check_pickup(&self, target: GridCoord) -> Result<(), Alarm> {
        if self.grid.cell_at(target) != CellType::Occupant {
            return Err(Alarm::NoOccupantToPickup { target });
        }
        // Occupant cells are passable, so this equals checking after the lift.
        if !self.grid.exit_reachable_from(target) {
            return Err(Alarm::DeadEnd { from: target });
        }
        Ok(())
    }

    fn lift(&mut self, target: GridCoord) {
        self.carrying = true;
        self.grid.set_cell(target, CellType::Free);
        info!("Occupant picked up at {} (robot at {})", target, self.position);
        self.record(Command::Pickup);
        self.notify();
    }

    fn record(&mut self, command: Command) {
        let record = MissionRecord {
            command,
            sensors: self.sense(),
            carrying: self.carrying,
        };
        self.log.push(record);
    }

    fn notify(&mut self) {
        self.observer
            .on_frame(&self.grid, self.position, !self.carrying);
    }
}

/// Everything left of a robot once its mission is over.
#[derive(Debug)]
pub struct RobotParts<O> {
    /// Mission records
    pub log: MissionLog,
    /// Recorded path, entrance first
    pub path: Vec<GridCoord>,
    /// Final maze state
    pub grid: GridMap,
    /// Final position
    pub position: GridCoord,
    /// Final heading
    pub heading: Heading,
    /// The visualization hook
    pub observer: O,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::FrameRecorder;
    use crate::sensors::SensorReading;

    fn robot(maze: &str) -> Robot {
        Robot::new(GridMap::parse(maze).unwrap())
    }

    #[test]
    fn test_power_on() {
        let r = robot("E.\n..");
        assert_eq!(r.position(), GridCoord::new(0, 0));
        assert_eq!(r.heading(), Heading::North);
        assert!(!r.is_carrying());
        assert_eq!(r.recorded_path(), &[GridCoord::new(0, 0)]);
        assert_eq!(r.log().commands(), vec![Command::PowerOn]);

        let first = r.log().records()[0];
        assert_eq!(first.sensors.front, SensorReading::Wall);
        assert_eq!(first.sensors.left, SensorReading::Wall);
        assert_eq!(first.sensors.right, SensorReading::Empty);
        assert_eq!(first.payload_label(), "empty");
    }

    #[test]
    fn test_turn_to_logs_each_step() {
        let mut r = robot("E.\n..");
        r.turn_to(Heading::West);
        assert_eq!(r.heading(), Heading::West);
        assert_eq!(r.log().count(Command::Turn), 3);

        // Intermediate readings: facing East, South, then West.
        let turns: Vec<_> = r.log().records()[1..].to_vec();
        assert_eq!(turns[0].sensors.front, SensorReading::Empty);
        assert_eq!(turns[1].sensors.front, SensorReading::Empty);
        assert_eq!(turns[2].sensors.front, SensorReading::Wall);

        r.turn_to(Heading::West);
        assert_eq!(r.log().count(Command::Turn), 3);
    }

    #[test]
    fn test_move_into_wall_raises_wall_collision() {
        let mut r = robot("EX\n..");
        let err = r.move_to(GridCoord::new(0, 1), Heading::East).unwrap_err();
        assert_eq!(
            err,
            Alarm::WallCollision {
                target: GridCoord::new(0, 1)
            }
        );
        assert_eq!(r.position(), GridCoord::new(0, 0));
        assert_eq!(r.heading(), Heading::North);
        assert_eq!(r.log().len(), 1);
    }

    #[test]
    fn test_move_out_of_bounds_raises_wall_collision() {
        let mut r = robot("EX\n..");
        let err = r.move_to(GridCoord::new(0, -1), Heading::West).unwrap_err();
        assert!(matches!(err, Alarm::WallCollision { .. }));
        assert_eq!(r.position(), GridCoord::new(0, 0));
    }

    #[test]
    fn test_move_onto_occupant_while_carrying_raises_collision() {
        let mut r = robot("E.\n@.");
        r.carrying = true;
        let err = r.move_to(GridCoord::new(1, 0), Heading::South).unwrap_err();
        assert_eq!(
            err,
            Alarm::OccupantCollision {
                target: GridCoord::new(1, 0)
            }
        );
        assert_eq!(r.position(), GridCoord::new(0, 0));
    }

    #[test]
    fn test_move_turns_then_moves() {
        let mut r = robot("E.\n..");
        r.move_to(GridCoord::new(0, 1), Heading::East).unwrap();
        assert_eq!(r.position(), GridCoord::new(0, 1));
        assert_eq!(r.heading(), Heading::East);
        assert_eq!(
            r.log().commands(),
            vec![Command::PowerOn, Command::Turn, Command::Move]
        );
    }

    #[test]
    fn test_pickup_without_occupant() {
        let mut r = robot("E.\n..");
        let err = r.pickup_here().unwrap_err();
        assert_eq!(
            err,
            Alarm::NoOccupantToPickup {
                target: GridCoord::new(0, 0)
            }
        );
        assert!(!r.is_carrying());

        let err = r.pickup_facing(GridCoord::new(0, 1)).unwrap_err();
        assert!(matches!(err, Alarm::NoOccupantToPickup { .. }));
        assert!(!r.is_carrying());
        assert_eq!(r.heading(), Heading::North);
    }

    #[test]
    fn test_pickup_facing_requires_adjacent_target() {
        let mut r = robot("E.@");
        let err = r.pickup_facing(GridCoord::new(0, 2)).unwrap_err();
        assert!(matches!(err, Alarm::NoOccupantToPickup { .. }));
        assert!(!r.is_carrying());
    }

    #[test]
    fn test_pickup_in_sealed_pocket_raises_dead_end() {
        let mut r = robot("XXXXX\nXEXXX\nXXXXX\nXXX@X\nXXXXX");
        r.position = GridCoord::new(3, 3);
        let err = r.pickup_here().unwrap_err();
        assert_eq!(
            err,
            Alarm::DeadEnd {
                from: GridCoord::new(3, 3)
            }
        );
        assert!(!r.is_carrying());
        assert_eq!(r.grid().cell_at(GridCoord::new(3, 3)), CellType::Occupant);
    }

    #[test]
    fn test_pickup_facing_in_sealed_pocket_raises_dead_end_before_turning() {
        let mut r = robot("XXXXX\nXEXXX\nXXXXX\nX.@XX\nXXXXX");
        r.position = GridCoord::new(3, 1);
        let target = GridCoord::new(3, 2);

        let err = r.pickup_facing(target).unwrap_err();
        assert_eq!(err, Alarm::DeadEnd { from: target });
        assert_eq!(err.code(), "DEAD_END");
        assert_eq!(r.heading(), Heading::North);
        assert!(!r.is_carrying());
        assert_eq!(r.grid().cell_at(target), CellType::Occupant);
        assert_eq!(r.log().commands(), vec![Command::PowerOn]);
    }

    #[test]
    fn test_pickup_here_clears_cell() {
        let mut r = robot("E@");
        r.position = GridCoord::new(0, 1);
        r.pickup_here().unwrap();
        assert!(r.is_carrying());
        assert_eq!(r.grid().cell_at(GridCoord::new(0, 1)), CellType::Free);
        let last = r.log().last().copied().unwrap();
        assert_eq!(last.command, Command::Pickup);
        assert_eq!(last.payload_label(), "carrying");
    }

    #[test]
    fn test_pickup_facing_turns_without_moving() {
        let mut r = Robot::with_observer(GridMap::parse("E.\n@.").unwrap(), FrameRecorder::new());
        r.pickup_facing(GridCoord::new(1, 0)).unwrap();
        assert_eq!(r.position(), GridCoord::new(0, 0));
        assert_eq!(r.heading(), Heading::South);
        assert!(r.is_carrying());
        assert_eq!(r.grid().find_occupant(), None);
        assert_eq!(
            r.log().commands(),
            vec![Command::PowerOn, Command::Turn, Command::Turn, Command::Pickup]
        );

        let frames = r.observer().frames();
        assert_eq!(frames.len(), 1);
        assert!(!frames[0].occupant_visible);
    }

    #[test]
    fn test_eject_without_payload() {
        let mut r = robot("E.\n..");
        assert_eq!(r.eject().unwrap_err(), Alarm::EjectWithoutPayload);
    }

    #[test]
    fn test_eject_not_facing_exit_keeps_payload() {
        let mut r = robot("E.\n..");
        r.position = GridCoord::new(0, 1);
        r.carrying = true;
        let err = r.eject().unwrap_err();
        assert_eq!(
            err,
            Alarm::EjectNotFacingExit {
                facing: GridCoord::new(-1, 1)
            }
        );
        assert!(r.is_carrying());
    }

    #[test]
    fn test_eject_places_occupant_on_entrance() {
        let mut r = robot("E.\n..");
        r.position = GridCoord::new(0, 1);
        r.carrying = true;
        r.turn_to(Heading::West);
        r.eject().unwrap();
        assert!(!r.is_carrying());
        assert_eq!(r.grid().cell_at(r.grid().entrance()), CellType::Occupant);

        let last = r.log().last().copied().unwrap();
        assert_eq!(last.command, Command::Eject);
        assert_eq!(last.sensors.front, SensorReading::Occupant);
        assert_eq!(last.payload_label(), "empty");
    }

    #[test]
    fn test_waypoints_keep_entrance() {
        let mut r = robot("E.\n..");
        r.push_waypoint(GridCoord::new(0, 1));
        assert_eq!(r.pop_waypoint(), Some(GridCoord::new(0, 1)));
        assert_eq!(r.pop_waypoint(), None);
        assert_eq!(r.recorded_path(), &[GridCoord::new(0, 0)]);
    }
}
