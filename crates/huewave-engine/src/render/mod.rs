//! Rasterizer seam.
//!
//! The engine never produces pixels. Whatever paints the gradient implements
//! [`Rasterizer`] and reads the scene's live values once per frame.

use crate::scene::Scene;
use crate::time::FrameTime;

/// Paints a scene. Called once per display refresh, after animations advance.
pub trait Rasterizer {
    fn present(&mut self, scene: &Scene, time: &FrameTime);
}
