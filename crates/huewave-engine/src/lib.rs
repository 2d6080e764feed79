//! Huewave engine crate.
//!
//! Choreographs an animated, rotating multi-stop gradient: keyframe tracks,
//! completion batches, the two-node scene they drive, and the winit host
//! runtime that supplies frames and resize notifications.

pub mod animation;
pub mod choreo;
pub mod coords;
pub mod core;
pub mod error;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

pub use error::ConstructionError;
