//! Time subsystem.
//!
//! Intended usage:
//! - one `FrameClock` per window (or per render loop)
//! - call `tick()` once per presented frame and feed `FrameTime::elapsed` to the animator

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
