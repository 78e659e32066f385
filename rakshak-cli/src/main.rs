//! Rakshak - maze rescue robot batch runner
//!
//! Loads maze files, runs one rescue mission per maze, animates each mission
//! in the terminal and saves every mission log as CSV.
//!
//! ## Usage
//!
//! ```text
//! rakshak                          # every *.txt in labirintos/
//! rakshak mazes/a.txt mazes/b.txt  # explicit maze files
//! rakshak --no-display --log-dir out
//! ```
//!
//! Exit status is non-zero when any mission failed.

mod batch;
mod config;
mod error;
mod report;
mod viewer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use crate::batch::BatchRunner;
use crate::config::{DEFAULT_CONFIG_PATH, RakshakConfig};
use crate::error::Result;

/// Maze rescue robot batch runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze files to run (default: configured mazes, or every *.txt in the maze directory)
    mazes: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory holding maze files
    #[arg(long)]
    maze_dir: Option<PathBuf>,

    /// Directory receiving CSV mission logs
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Do not animate missions in the terminal
    #[arg(long)]
    no_display: bool,

    /// Pause after each frame in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log filter when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Apply command line overrides on top of the file configuration.
    fn apply(&self, config: &mut RakshakConfig) {
        if let Some(dir) = &self.maze_dir {
            config.batch.maze_dir = dir.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.batch.log_dir = dir.clone();
        }
        if self.no_display {
            config.display.enabled = false;
        }
        if let Some(delay) = self.delay_ms {
            config.display.step_delay_ms = delay;
        }
        if let Some(level) = &self.log_level {
            config.display.log_level = level.clone();
        }
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, source) = match RakshakConfig::load_or_default(&args.config) {
        Ok((mut config, source)) => {
            args.apply(&mut config);
            (config, source)
        }
        Err(e) => {
            init_logging(args.log_level.as_deref().unwrap_or("info"));
            error!("Failed to load {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.display.log_level);
    info!("Configuration: {}", source);

    match run(config, &args.mazes) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the batch. Returns whether every mission succeeded.
fn run(config: RakshakConfig, explicit: &[PathBuf]) -> Result<bool> {
    info!("Rakshak v{}", env!("CARGO_PKG_VERSION"));

    let runner = BatchRunner::new(config)?;
    runner.prepare_dirs()?;
    let mazes = runner.discover(explicit)?;
    if mazes.is_empty() {
        info!(
            "No mazes found in {}",
            runner.config().batch.maze_dir.display()
        );
        return Ok(true);
    }

    let results = runner.run(&mazes);
    let failed = results.iter().filter(|r| r.is_failure()).count();

    println!();
    for result in &results {
        println!("[{}] {}", result.id, result.summary());
    }
    println!(
        "{} of {} mission(s) failed, logs in {}",
        failed,
        results.len(),
        runner.config().batch.log_dir.display()
    );

    Ok(failed == 0)
}
