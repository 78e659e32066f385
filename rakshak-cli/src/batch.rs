//! Multi-maze batch execution.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rakshak::{GridMap, Mission, MissionError, MissionObserver, MissionOutcome, NullObserver};

use crate::config::RakshakConfig;
use crate::error::{CliError, Result};
use crate::report::save_csv;
use crate::viewer::TerminalViewer;

/// How one maze of the batch ended.
#[derive(Debug)]
pub enum MazeStatus {
    /// Occupant delivered to the entrance
    Rescued {
        /// Saved CSV log
        log_path: PathBuf,
        /// Number of log records
        records: usize,
    },
    /// Maze searched completely, no occupant found
    NotFound {
        /// Saved CSV log
        log_path: PathBuf,
        /// Number of log records
        records: usize,
    },
    /// Maze file does not exist
    Missing,
    /// The mission failed or its log could not be saved
    Failed(CliError),
}

/// Result for one maze.
#[derive(Debug)]
pub struct MazeResult {
    /// Maze file
    pub maze: PathBuf,
    /// Mission identifier (file stem)
    pub id: String,
    /// What happened
    pub status: MazeStatus,
}

impl MazeResult {
    /// Did this maze fail?
    pub fn is_failure(&self) -> bool {
        matches!(self.status, MazeStatus::Failed(_))
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        match &self.status {
            MazeStatus::Rescued { log_path, records } => format!(
                "{}: rescued ({} records), log saved to {}",
                self.maze.display(),
                records,
                log_path.display()
            ),
            MazeStatus::NotFound { log_path, records } => format!(
                "{}: no occupant found ({} records), log saved to {}",
                self.maze.display(),
                records,
                log_path.display()
            ),
            MazeStatus::Missing => format!("{}: skipped, file not found", self.maze.display()),
            MazeStatus::Failed(e) => format!("{}: FAILED [{}] {}", self.maze.display(), e.code(), e),
        }
    }
}

/// Runs one independent mission per maze file.
pub struct BatchRunner {
    config: RakshakConfig,
}

impl BatchRunner {
    /// Create a runner, rejecting invalid exploration settings up front.
    pub fn new(config: RakshakConfig) -> Result<Self> {
        config.exploration.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &RakshakConfig {
        &self.config
    }

    /// Resolve the maze list.
    ///
    /// Explicit paths win; otherwise the configured names inside `maze_dir`;
    /// otherwise every `*.txt` file in `maze_dir`, sorted by name.
    pub fn discover(&self, explicit: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if !explicit.is_empty() {
            return Ok(explicit.to_vec());
        }

        let maze_dir = &self.config.batch.maze_dir;
        if !self.config.batch.mazes.is_empty() {
            return Ok(self
                .config
                .batch
                .mazes
                .iter()
                .map(|name| maze_dir.join(name))
                .collect());
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(maze_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                found.push(path);
            }
        }
        found.sort();
        Ok(found)
    }

    /// Create the maze and log directories if they are missing.
    pub fn prepare_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.config.batch.maze_dir)?;
        fs::create_dir_all(&self.config.batch.log_dir)?;
        Ok(())
    }

    /// Run every maze in order. A failing maze does not stop the batch.
    pub fn run(&self, mazes: &[PathBuf]) -> Vec<MazeResult> {
        info!("Running {} maze(s)", mazes.len());
        mazes.iter().map(|maze| self.run_maze(maze)).collect()
    }

    /// Run a single maze and save its log.
    pub fn run_maze(&self, maze: &Path) -> MazeResult {
        let id = mission_id(maze);
        let status = if !maze.exists() {
            warn!("Maze {} not found, skipping", maze.display());
            MazeStatus::Missing
        } else {
            match self.execute(maze, &id) {
                Ok(status) => status,
                Err(e) => {
                    error!("{}", e);
                    MazeStatus::Failed(e)
                }
            }
        };
        MazeResult {
            maze: maze.to_path_buf(),
            id,
            status,
        }
    }

    fn execute(&self, maze: &Path, id: &str) -> Result<MazeStatus> {
        let text = fs::read_to_string(maze)?;
        let mission_err = |source: MissionError| CliError::Mission {
            maze: maze.to_path_buf(),
            source,
        };

        let grid = GridMap::parse(&text).map_err(|e| mission_err(e.into()))?;
        let display = &self.config.display;
        let observer: Box<dyn MissionObserver> = if display.enabled {
            Box::new(TerminalViewer::stdout(id, display.step_delay_ms))
        } else {
            Box::new(NullObserver)
        };

        let report = Mission::with_observer(grid, id, observer)
            .with_config(self.config.exploration.clone())
            .and_then(Mission::run)
            .map_err(mission_err)?;

        let records = report.log.len();
        let log_path = save_csv(&report.log, &self.config.batch.log_dir, id)?;
        Ok(match report.outcome {
            MissionOutcome::Rescued { .. } => MazeStatus::Rescued { log_path, records },
            MissionOutcome::OccupantNotFound => MazeStatus::NotFound { log_path, records },
        })
    }
}

/// Mission identifier for a maze file: its stem.
pub fn mission_id(maze: &Path) -> String {
    maze.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mission".to_string())
}
