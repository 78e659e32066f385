//! Mission tuning parameters.

use serde::{Deserialize, Serialize};

use crate::core::Heading;
use crate::error::ConfigError;

/// Exploration configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationConfig {
    /// Order in which neighbours are tried at every cell (default: N, E, S, W)
    #[serde(default = "default_search_order")]
    pub search_order: [Heading; 4],
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            search_order: default_search_order(),
        }
    }
}

impl ExplorationConfig {
    /// Check that every heading appears exactly once in the search order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = [false; 4];
        for heading in self.search_order {
            if std::mem::replace(&mut seen[heading.index()], true) {
                let listed: Vec<String> = self.search_order.iter().map(|h| h.to_string()).collect();
                return Err(ConfigError::InvalidSearchOrder(listed.join(", ")));
            }
        }
        Ok(())
    }
}

fn default_search_order() -> [Heading; 4] {
    Heading::ALL
}
