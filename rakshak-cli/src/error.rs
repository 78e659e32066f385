//! Error types for the rakshak batch runner

use std::path::PathBuf;

use rakshak::{ConfigError, MissionError};

/// Result type alias
pub type Result<T> = std::result::Result<T, CliError>;

/// Batch runner error types
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::config::RakshakConfig`]
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A mission could not be completed
    #[error("Mission {maze} failed: {source}")]
    Mission {
        /// Maze file the mission ran on
        maze: PathBuf,
        /// Why the mission failed
        #[source]
        source: MissionError,
    },
}

impl CliError {
    /// Short code for summary lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::ConfigParse(_) | Self::Config(_) => "CONFIG",
            Self::Mission { source, .. } => match source {
                MissionError::Alarm(alarm) => alarm.code(),
                MissionError::Maze(_) => "INVALID_MAZE",
                MissionError::Config(_) => "CONFIG",
            },
        }
    }
}
