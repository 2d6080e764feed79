use crate::coords::Vec2;
use crate::error::ConstructionError;

use super::Rgba8;

/// Minimum number of stops a gradient brush accepts.
pub const MIN_COLOR_STOPS: usize = 2;

/// A single gradient stop.
///
/// `offset` is expected in [0, 1] and, by convention, non-decreasing across a
/// brush. Neither is enforced here; blending is the rasterizer's business.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba8,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient brush.
///
/// Semantics:
/// - the start point is implicitly the origin; `end_point` lives in the unit square
/// - `rotation_deg` rotates the gradient around `center_point`
/// - `center_point` is in the logical-pixel space of the painted visual
///
/// Every field except the stop offsets is an animation or resize target.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBrush {
    pub end_point: Vec2,
    pub rotation_deg: f32,
    pub center_point: Vec2,
    stops: Vec<ColorStop>,
}

impl GradientBrush {
    /// Creates a brush with the end point collapsed onto the origin.
    ///
    /// Fails with [`ConstructionError::TooFewColorStops`] for fewer than two stops.
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, ConstructionError> {
        if stops.len() < MIN_COLOR_STOPS {
            return Err(ConstructionError::TooFewColorStops { count: stops.len() });
        }

        Ok(Self {
            end_point: Vec2::zero(),
            rotation_deg: 0.0,
            center_point: Vec2::zero(),
            stops,
        })
    }

    /// Implicit start point of the gradient axis.
    #[inline]
    pub const fn start_point(&self) -> Vec2 {
        Vec2::zero()
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn stop(&self, index: usize) -> Option<&ColorStop> {
        self.stops.get(index)
    }

    #[inline]
    pub fn stop_mut(&mut self, index: usize) -> Option<&mut ColorStop> {
        self.stops.get_mut(index)
    }

    /// Returns true when the brush geometry is usable by a rasterizer.
    pub fn is_valid(&self) -> bool {
        self.end_point.is_finite()
            && self.center_point.is_finite()
            && self.rotation_deg.is_finite()
            && self.stops.iter().all(|s| s.offset.is_finite())
            && self.stops.len() >= MIN_COLOR_STOPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Rgba8::new(255, 0, 0, 255)),
            ColorStop::new(1.0, Rgba8::new(0, 0, 255, 255)),
        ]
    }

    #[test]
    fn new_brush_starts_collapsed() {
        let brush = GradientBrush::new(two_stops()).unwrap();
        assert_eq!(brush.end_point, Vec2::zero());
        assert_eq!(brush.start_point(), Vec2::zero());
        assert_eq!(brush.rotation_deg, 0.0);
        assert!(brush.is_valid());
    }

    #[test]
    fn single_stop_is_rejected() {
        let err = GradientBrush::new(vec![ColorStop::new(0.0, Rgba8::transparent())]).unwrap_err();
        assert_eq!(err, ConstructionError::TooFewColorStops { count: 1 });
    }

    #[test]
    fn unsorted_offsets_are_accepted() {
        let mut stops = two_stops();
        stops.reverse();
        assert!(GradientBrush::new(stops).is_ok());
    }

    #[test]
    fn stop_lookup_out_of_range() {
        let brush = GradientBrush::new(two_stops()).unwrap();
        assert!(brush.stop(1).is_some());
        assert!(brush.stop(2).is_none());
    }
}
