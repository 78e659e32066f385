//! Visualization hook.

use crate::core::GridCoord;
use crate::grid::GridMap;

/// Receives a notification after every position or occupant-visibility change.
///
/// Implement this trait to draw the mission as it happens (terminal, GUI,
/// recording). Notifications are fire-and-forget: nothing the observer does
/// feeds back into the robot.
///
/// # Example
///
/// ```
/// use rakshak::{GridCoord, GridMap, MissionObserver};
///
/// struct PrintFrames;
///
/// impl MissionObserver for PrintFrames {
///     fn on_frame(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool) {
///         println!("{}\n", grid.render(robot, occupant_visible));
///     }
/// }
/// ```
pub trait MissionObserver {
    /// Called with the grid, the robot's position and whether the occupant
    /// should currently be drawn.
    fn on_frame(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool);
}

/// Observer that ignores every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MissionObserver for NullObserver {
    fn on_frame(&mut self, _grid: &GridMap, _robot: GridCoord, _occupant_visible: bool) {}
}

impl<T: MissionObserver + ?Sized> MissionObserver for &mut T {
    fn on_frame(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool) {
        (**self).on_frame(grid, robot, occupant_visible);
    }
}

impl<T: MissionObserver + ?Sized> MissionObserver for Box<T> {
    fn on_frame(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool) {
        (**self).on_frame(grid, robot, occupant_visible);
    }
}

/// A frame captured by [`FrameRecorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Robot position
    pub robot: GridCoord,
    /// Whether the occupant was drawn
    pub occupant_visible: bool,
    /// Rendered maze text
    pub text: String,
}

/// Observer that keeps every frame in memory.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in the order they were observed
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl MissionObserver for FrameRecorder {
    fn on_frame(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool) {
        self.frames.push(Frame {
            robot,
            occupant_visible,
            text: grid.render(robot, occupant_visible),
        });
    }
}
