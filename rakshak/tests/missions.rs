//! End-to-end mission tests.
//!
//! Exercises the public API the way a batch driver does: parse a maze, run a
//! mission, inspect the report and the log.

mod common;

use common::*;
use rakshak::{
    Alarm, CellType, Command, ExplorationConfig, ExplorationState, FrameRecorder, GridCoord,
    GridMap, Heading, LOG_HEADER, Mission, MissionError, MissionOutcome, SensorReading,
};

#[test]
fn test_corridor_rescue_log() {
    init_logging();
    let report = Mission::parse(CORRIDOR_EAST, "corridor").unwrap().run().unwrap();

    assert_eq!(
        report.outcome,
        MissionOutcome::Rescued {
            pickup: GridCoord::new(0, 3)
        }
    );
    assert_eq!(
        tokens(&report.log),
        [
            "POWER_ON", "TURN", "MOVE", "MOVE", "PICKUP", // out
            "TURN", "TURN", "MOVE", // back, stopping next to the entrance
            "EJECT",
        ]
    );

    let eject = report.log.last().copied().unwrap();
    assert_eq!(eject.sensors.front, SensorReading::Occupant);
    assert_eq!(eject.payload_label(), "empty");
    assert_eq!(report.position, GridCoord::new(0, 1));
    assert_eq!(report.heading, Heading::West);
    assert_eq!(report.grid.cell_at(GridCoord::new(0, 0)), CellType::Occupant);
    assert_eq!(report.grid.find_occupant(), Some(GridCoord::new(0, 0)));
}

#[test]
fn test_corridor_already_facing_needs_no_turn_to_eject() {
    let report = Mission::parse(CORRIDOR_NORTH, "north").unwrap().run().unwrap();
    assert!(report.is_rescued());
    assert_eq!(
        tokens(&report.log),
        ["POWER_ON", "MOVE", "MOVE", "PICKUP", "TURN", "TURN", "MOVE", "EJECT"]
    );
}

#[test]
fn test_payload_column_tracks_pickup_and_eject() {
    let report = Mission::parse(BRANCHING, "branching").unwrap().run().unwrap();
    assert!(report.is_rescued());

    let pickup = report
        .log
        .iter()
        .position(|r| r.command == Command::Pickup)
        .unwrap();
    let eject = report.log.len() - 1;
    for (i, record) in report.log.iter().enumerate() {
        let expected = if (pickup..eject).contains(&i) {
            "carrying"
        } else {
            "empty"
        };
        assert_eq!(record.payload_label(), expected, "record {i}");
    }
    assert_eq!(report.log.count(Command::Pickup), 1);
    assert_eq!(report.log.count(Command::Eject), 1);
    assert_eq!(report.log.records()[0].fields().len(), LOG_HEADER.len());
}

#[test]
fn test_backtracking_is_path_consistent() {
    for maze in [BRANCHING, EMPTY_ROOM, CORRIDOR_EAST, "E..\n.XX\n..@"] {
        let (robot, _) = explore(maze);
        let moves = robot.log().count(Command::Move);
        // Every forward move enters a new cell.
        let forward = robot.visited_count() - 1;
        let backward = moves - forward;
        let path_len = robot.recorded_path().len() - 1;
        assert_eq!(forward, backward + path_len, "maze:\n{maze}");
    }
}

#[test]
fn test_branching_maze_backtracks_once() {
    let (robot, state) = explore(BRANCHING);
    assert_eq!(
        state,
        ExplorationState::OccupantSecured {
            pickup: GridCoord::new(4, 5)
        }
    );
    assert_eq!(robot.log().count(Command::Move), 8);
    assert_eq!(
        robot.recorded_path(),
        &[
            GridCoord::new(1, 1),
            GridCoord::new(1, 2),
            GridCoord::new(1, 3),
            GridCoord::new(2, 3),
            GridCoord::new(2, 4),
            GridCoord::new(2, 5),
            GridCoord::new(3, 5),
        ]
    );
}

#[test]
fn test_missions_are_deterministic() {
    let first = Mission::parse(BRANCHING, "a").unwrap().run().unwrap();
    let second = Mission::parse(BRANCHING, "b").unwrap().run().unwrap();
    assert_eq!(first.log, second.log);
    assert_eq!(first.path, second.path);
    assert_eq!(first.grid, second.grid);
}

#[test]
fn test_no_occupant_ends_at_entrance() {
    let report = Mission::parse(EMPTY_ROOM, "empty").unwrap().run().unwrap();
    assert_eq!(report.outcome, MissionOutcome::OccupantNotFound);
    assert_eq!(report.position, GridCoord::new(1, 1));
    assert_eq!(report.path, vec![GridCoord::new(1, 1)]);
    assert_eq!(report.log.count(Command::Pickup), 0);
    assert_eq!(report.log.count(Command::Eject), 0);
    assert_eq!(report.log.count(Command::Move), 16);
}

#[test]
fn test_occupant_beside_entrance_cannot_be_ejected() {
    let err = Mission::parse("E@", "beside").unwrap().run().unwrap_err();
    assert_eq!(
        err.alarm(),
        Some(&Alarm::InvalidEjectPosition {
            position: GridCoord::new(0, 0)
        })
    );
    assert_eq!(err.alarm().map(Alarm::code), Some("INVALID_EJECT_POSITION"));
}

#[test]
fn test_invalid_maze_is_rejected() {
    assert!(matches!(
        Mission::parse("...\n.@.", "no-entrance"),
        Err(MissionError::Maze(_))
    ));
}

#[test]
fn test_invalid_search_order_is_rejected() {
    let config = ExplorationConfig {
        search_order: [Heading::North, Heading::East, Heading::East, Heading::West],
    };
    let result = Mission::parse(CORRIDOR_EAST, "bad-config")
        .unwrap()
        .with_config(config);
    assert!(matches!(result, Err(MissionError::Config(_))));
}

#[test]
fn test_search_order_from_config() {
    let config = ExplorationConfig {
        search_order: [Heading::West, Heading::South, Heading::East, Heading::North],
    };
    let report = Mission::parse("E..\n.XX\n..@", "order")
        .unwrap()
        .with_config(config)
        .unwrap()
        .run()
        .unwrap();
    assert!(report.is_rescued());
    assert_eq!(report.path.len(), 4);
}

#[test]
fn test_observer_sees_occupant_hidden_while_carried() {
    let mut recorder = FrameRecorder::new();
    let grid = GridMap::parse(CORRIDOR_EAST).unwrap();
    let report = Mission::with_observer(grid, "frames", &mut recorder)
        .run()
        .unwrap();
    assert!(report.is_rescued());

    let frames = recorder.frames();
    // Two moves out, pickup, one move back, eject.
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0].text, "ER.@");
    assert!(frames[0].occupant_visible);
    assert!(!frames[2].occupant_visible);
    assert_eq!(frames[2].text, "E.R.");
    assert_eq!(frames[3].text, "ER..");
    assert_eq!(frames[4].text, "@R..");
    assert!(frames[4].occupant_visible);
}
