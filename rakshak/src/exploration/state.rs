//! Exploration state machine states.

use crate::core::GridCoord;

/// Exploration state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationState {
    /// Depth-first search in progress
    Exploring,

    /// Occupant collected; ready for the return phase
    OccupantSecured {
        /// Cell the occupant was collected from
        pickup: GridCoord,
    },

    /// Pickup refused because the entrance is unreachable
    DeadEndAborted {
        /// Occupant cell the reachability check started from
        from: GridCoord,
    },

    /// Another alarm stopped the search
    Faulted {
        /// Alarm code
        code: &'static str,
    },

    /// Every reachable cell visited without finding the occupant
    Exhausted,
}

impl ExplorationState {
    /// Did exploration end with the occupant on board?
    pub fn is_secured(&self) -> bool {
        matches!(self, ExplorationState::OccupantSecured { .. })
    }
}
