//! Scene graph consumed by the rasterizer.
//!
//! Two nodes: a surface visual that covers the host surface, and the gradient
//! brush it is painted with. The scene owns both; the visual only refers to
//! the brush as its paint source.

mod resize;

pub use resize::ResizeHandler;

use crate::animation::{AnimatedValue, PropertyId, PropertyTarget};
use crate::coords::Vec2;
use crate::paint::GradientBrush;

/// Sprite-like visual filling the host surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceVisual {
    /// Logical size. Only the rasterizer reads it.
    pub size: Vec2,
}

/// The persistent scene: one visual, one brush.
///
/// `revision` increases on every successful property write, so consumers can
/// tell whether anything changed between two frames.
#[derive(Debug, Clone)]
pub struct Scene {
    visual: SurfaceVisual,
    brush: GradientBrush,
    revision: u64,
}

impl Scene {
    pub fn new(brush: GradientBrush) -> Self {
        Self {
            visual: SurfaceVisual::default(),
            brush,
            revision: 0,
        }
    }

    #[inline]
    pub fn visual(&self) -> &SurfaceVisual {
        &self.visual
    }

    /// Paint source of the visual.
    #[inline]
    pub fn brush(&self) -> &GradientBrush {
        &self.brush
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_visual_size(&mut self, size: Vec2) {
        self.visual.size = size;
        self.bump();
    }

    pub fn set_center_point(&mut self, center: Vec2) {
        self.brush.center_point = center;
        self.bump();
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl PropertyTarget for Scene {
    fn read(&self, property: PropertyId) -> Option<AnimatedValue> {
        match property {
            PropertyId::EndPoint => Some(AnimatedValue::Vector(self.brush.end_point)),
            PropertyId::RotationAngle => Some(AnimatedValue::Scalar(self.brush.rotation_deg)),
            PropertyId::StopColor(index) => {
                self.brush.stop(index).map(|s| AnimatedValue::Color(s.color))
            }
        }
    }

    fn write(&mut self, property: PropertyId, value: AnimatedValue) -> bool {
        match (property, value) {
            (PropertyId::EndPoint, AnimatedValue::Vector(v)) => self.brush.end_point = v,
            (PropertyId::RotationAngle, AnimatedValue::Scalar(deg)) => self.brush.rotation_deg = deg,
            (PropertyId::StopColor(index), AnimatedValue::Color(color)) => {
                let Some(stop) = self.brush.stop_mut(index) else {
                    return false;
                };
                stop.color = color;
            }
            _ => return false,
        }
        self.bump();
        true
    }
}
