//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic frame timestamps)
//! - Input events (key names to held flags and commands)

pub mod input;
pub mod time;

pub use input::{InputState, Key};
pub use time::{Clock, ManualClock};
#[cfg(not(target_arch = "wasm32"))]
pub use time::InstantClock;
#[cfg(target_arch = "wasm32")]
pub use time::PerformanceClock;
