//! Mission lifecycle: the action log, the return phase and the end-to-end runner.
//!
//! ```text
//! POWER_ON ──► Explorer ──► OccupantSecured ──► ReturnController ──► EJECT
//!                  │
//!                  └──────► Exhausted (no occupant; nothing to return)
//! ```
//!
//! Any alarm along the way aborts the mission.

mod record;
mod return_home;
mod runner;

pub use record::{Command, LOG_HEADER, MissionLog, MissionRecord};
pub use return_home::ReturnController;
pub use runner::{Mission, MissionOutcome, MissionReport};
