//! Effect choreography.
//!
//! `Entrance` sweeps the brush end point once. When that batch completes,
//! `Steady` starts the two stop-color cycles and the rotation together, and
//! they run until the scene is torn down.

mod choreographer;
mod config;

pub use choreographer::{
    color_cycle_track, entrance_track, rotation_track, Choreographer, Phase, STOP_1, STOP_2,
};
pub use config::{ChoreoConfig, Palette, StopPalette};
