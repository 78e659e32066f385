//! Configuration loading for the rakshak batch runner

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rakshak::ExplorationConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "rakshak.toml";

/// Where the active configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// Built-in defaults; the named file did not exist
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded from {}", path.display()),
            ConfigSource::Defaults(path) => {
                write!(f, "defaults ({} not found)", path.display())
            }
        }
    }
}

/// Main configuration structure
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RakshakConfig {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub exploration: ExplorationConfig,
}

/// Which mazes to run and where logs go
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Directory holding maze text files (default: labirintos)
    #[serde(default = "default_maze_dir")]
    pub maze_dir: PathBuf,

    /// Directory receiving CSV mission logs (default: logs)
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Maze file names inside `maze_dir`; empty runs every `*.txt`
    #[serde(default)]
    pub mazes: Vec<String>,
}

/// Terminal output settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Draw every frame in the terminal (default: true)
    #[serde(default = "default_display_enabled")]
    pub enabled: bool,

    /// Pause after each frame in milliseconds (default: 100)
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Log filter when RUST_LOG is unset (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_maze_dir() -> PathBuf {
    PathBuf::from("labirintos")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_display_enabled() -> bool {
    true
}

fn default_step_delay_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            maze_dir: default_maze_dir(),
            log_dir: default_log_dir(),
            mazes: Vec::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: default_display_enabled(),
            step_delay_ms: default_step_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl RakshakConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RakshakConfig = toml::from_str(&content)?;
        config.exploration.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Runs before logging is set up, so the source is returned for the
    /// caller to report.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource)> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())))
        }
    }
}
