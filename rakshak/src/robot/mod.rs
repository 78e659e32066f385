//! The rescue robot: pose, payload and the alarm-guarded action set.

mod machine;
mod observer;

pub use machine::{Robot, RobotParts};
pub use observer::{Frame, FrameRecorder, MissionObserver, NullObserver};
