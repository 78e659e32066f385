//! Depth-first occupant search with physical backtracking.

use log::{debug, info};

use crate::config::ExplorationConfig;
use crate::core::{CellType, GridCoord, Heading};
use crate::error::{Alarm, ConfigError};
use crate::robot::{MissionObserver, Robot};

use super::state::ExplorationState;

/// One level of the depth-first search.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Cell this frame explores from
    pos: GridCoord,
    /// Index into the search order of the next neighbour to try
    next: usize,
    /// Heading of the move that entered `pos` (`None` for the start cell)
    via: Option<Heading>,
}

/// Depth-first explorer.
///
/// Drives a [`Robot`] through the maze until the occupant is on board or
/// every reachable cell has been visited. Recursion is replaced by an
/// explicit frame stack, so search depth is bounded only by memory.
///
/// Every forward move that leads nowhere is undone with a logged reverse
/// move, so the mission log traces the robot's physical route.
#[derive(Clone, Debug)]
pub struct Explorer {
    config: ExplorationConfig,
    state: ExplorationState,
    stack: Vec<Frame>,
}

impl Default for Explorer {
    fn default() -> Self {
        Self {
            config: ExplorationConfig::default(),
            state: ExplorationState::Exploring,
            stack: Vec::new(),
        }
    }
}

impl Explorer {
    /// Create an explorer with a validated configuration.
    pub fn new(config: ExplorationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: ExplorationState::Exploring,
            stack: Vec::new(),
        })
    }

    /// Current state
    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// Search from the robot's current cell.
    ///
    /// Returns the terminal state: [`ExplorationState::OccupantSecured`] or
    /// [`ExplorationState::Exhausted`]. Alarms abort the search and are
    /// returned unchanged after the state is updated.
    pub fn run<O: MissionObserver>(
        &mut self,
        robot: &mut Robot<O>,
    ) -> Result<ExplorationState, Alarm> {
        self.state = ExplorationState::Exploring;
        self.stack.clear();
        info!("Exploration started at {}", robot.position());

        match self.search(robot) {
            Ok(Some(pickup)) => {
                self.state = ExplorationState::OccupantSecured { pickup };
                info!(
                    "Occupant secured from {} after visiting {} cells",
                    pickup,
                    robot.visited_count()
                );
            }
            Ok(None) => {
                self.state = ExplorationState::Exhausted;
                info!(
                    "Exploration exhausted after visiting {} cells",
                    robot.visited_count()
                );
            }
            Err(alarm) => {
                self.state = match alarm {
                    Alarm::DeadEnd { from } => ExplorationState::DeadEndAborted { from },
                    _ => ExplorationState::Faulted { code: alarm.code() },
                };
                return Err(alarm);
            }
        }
        Ok(self.state)
    }

    /// Returns the pickup cell on success, `None` when the maze is exhausted.
    fn search<O: MissionObserver>(
        &mut self,
        robot: &mut Robot<O>,
    ) -> Result<Option<GridCoord>, Alarm> {
        let start = robot.position();
        if let Some(pickup) = enter(robot)? {
            return Ok(Some(pickup));
        }
        self.stack.push(Frame {
            pos: start,
            next: 0,
            via: None,
        });

        while let Some(frame) = self.stack.last_mut() {
            let Some(&heading) = self.config.search_order.get(frame.next) else {
                let done = *frame;
                self.stack.pop();
                if let Some(via) = done.via {
                    let back = via.opposite();
                    let parent = done.pos.step(back);
                    debug!("Backtrack {} -> {}", done.pos, parent);
                    robot.move_to(parent, back)?;
                    robot.pop_waypoint();
                }
                continue;
            };
            frame.next += 1;
            let pos = frame.pos;

            let neighbor = pos.step(heading);
            if robot.is_visited(neighbor) {
                continue;
            }

            match robot.grid().cell_at(neighbor) {
                // Covers the cell behind the robot, which no sensor sees.
                CellType::Occupant => {
                    robot.pickup_facing(neighbor)?;
                    return Ok(Some(neighbor));
                }
                cell if cell.is_open_floor() => {
                    robot.push_waypoint(neighbor);
                    robot.move_to(neighbor, heading)?;
                    if let Some(pickup) = enter(robot)? {
                        return Ok(Some(pickup));
                    }
                    self.stack.push(Frame {
                        pos: neighbor,
                        next: 0,
                        via: Some(heading),
                    });
                }
                _ => {}
            }
        }

        Ok(None)
    }
}

/// Visit the robot's current cell and collect the occupant if it is in reach.
fn enter<O: MissionObserver>(robot: &mut Robot<O>) -> Result<Option<GridCoord>, Alarm> {
    let pos = robot.position();
    robot.mark_visited(pos);

    let sensors = robot.sense();
    if let Some(side) = sensors.occupant_side() {
        let target = pos.step(side.resolve(robot.heading()));
        if !robot.is_visited(target) {
            debug!("Occupant sensed {:?} at {}", side, target);
            robot.pickup_facing(target)?;
            return Ok(Some(target));
        }
    }

    if robot.grid().cell_at(pos) == CellType::Occupant {
        robot.pickup_here()?;
        return Ok(Some(pos));
    }

    Ok(None)
}
