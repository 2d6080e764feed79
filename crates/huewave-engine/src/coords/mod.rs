//! Coordinate types shared by the scene, the animator and the host adapter.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware) for sizes and center points
//! - Unit square `[0, 1]²` for gradient end points
//! - Origin top-left, +X right, +Y down

mod vec2;

pub use vec2::Vec2;
