//! Paint model shared between the scene and rasterizers.
//!
//! Scope:
//! - color representation (straight alpha, 8-bit channels)
//! - the linear gradient brush and its stops
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Rgba8;
pub use gradient::{ColorStop, GradientBrush, MIN_COLOR_STOPS};
