use crate::coords::Vec2;
use crate::paint::Rgba8;

/// Animatable properties of the gradient scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PropertyId {
    /// Brush end point (vector).
    EndPoint,
    /// Brush rotation in degrees (scalar).
    RotationAngle,
    /// Color of the stop at this index (color).
    StopColor(usize),
}

impl PropertyId {
    pub const fn kind(self) -> PropertyKind {
        match self {
            Self::EndPoint => PropertyKind::Vector,
            Self::RotationAngle => PropertyKind::Scalar,
            Self::StopColor(_) => PropertyKind::Color,
        }
    }
}

/// Value type carried by a property or produced by a track.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PropertyKind {
    Vector,
    Color,
    Scalar,
}

/// A live property value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnimatedValue {
    Vector(Vec2),
    Color(Rgba8),
    Scalar(f32),
}

impl AnimatedValue {
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Vector(_) => PropertyKind::Vector,
            Self::Color(_) => PropertyKind::Color,
            Self::Scalar(_) => PropertyKind::Scalar,
        }
    }
}

/// Anything the animator can read start values from and write frames into.
pub trait PropertyTarget {
    /// Current value, or `None` if the property does not exist on this target.
    fn read(&self, property: PropertyId) -> Option<AnimatedValue>;

    /// Replaces the value. Returns false when the property is missing or the kind differs.
    fn write(&mut self, property: PropertyId, value: AnimatedValue) -> bool;
}
