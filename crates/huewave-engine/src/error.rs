use thiserror::Error;

use crate::animation::{PropertyId, PropertyKind};

/// Errors raised while building tracks, brushes or animation groups.
///
/// All of them surface synchronously at setup time. Once a choreography is
/// running, evaluation is total and cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("track duration must be positive, got {seconds}s")]
    NonPositiveDuration { seconds: f64 },

    #[error("keyframe track has no keyframes")]
    EmptyKeyframes,

    #[error("keyframe progress {progress} is outside [0, 1]")]
    ProgressOutOfRange { progress: f32 },

    #[error("gradient brush needs at least 2 color stops, got {count}")]
    TooFewColorStops { count: usize },

    #[error("property {0:?} does not exist on the target")]
    UnknownProperty(PropertyId),

    #[error("property {property:?} holds {expected:?} values, track produces {found:?}")]
    KindMismatch {
        property: PropertyId,
        expected: PropertyKind,
        found: PropertyKind,
    },
}
