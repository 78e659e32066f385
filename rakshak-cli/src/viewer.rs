//! Terminal animation of a running mission.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::debug;
use rakshak::{GridCoord, GridMap, MissionObserver};

/// Redraws the maze after every robot move, pickup and eject.
pub struct TerminalViewer<W: Write = Stdout> {
    out: W,
    mission: String,
    delay: Duration,
    frames: usize,
}

impl TerminalViewer<Stdout> {
    /// Draw to stdout, pausing `step_delay_ms` after each frame.
    pub fn stdout(mission: impl Into<String>, step_delay_ms: u64) -> Self {
        Self::new(io::stdout(), mission, Duration::from_millis(step_delay_ms))
    }
}

impl<W: Write> TerminalViewer<W> {
    /// Draw to any writer.
    pub fn new(out: W, mission: impl Into<String>, delay: Duration) -> Self {
        Self {
            out,
            mission: mission.into(),
            delay,
            frames: 0,
        }
    }

    /// Frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn draw(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out, "{}", grid.render(robot, occupant_visible))?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "mission {} | frame {} | robot {} | {}",
            self.mission,
            self.frames,
            robot,
            if occupant_visible { "searching" } else { "carrying occupant" }
        )?;
        self.out.flush()
    }
}

impl<W: Write> MissionObserver for TerminalViewer<W> {
    fn on_frame(&mut self, grid: &GridMap, robot: GridCoord, occupant_visible: bool) {
        self.frames += 1;
        // Drawing is best effort; a closed terminal must not abort the mission.
        if let Err(e) = self.draw(grid, robot, occupant_visible) {
            debug!("Frame {} not drawn: {}", self.frames, e);
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
