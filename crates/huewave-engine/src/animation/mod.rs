//! Keyframe animation core.
//!
//! Layers, leaf first:
//! - `Easing`: normalized time remap
//! - `KeyframeTrack<T>`: evaluation of one property curve at an elapsed time
//! - `PropertyTarget`: how tracks reach live values
//! - `Animator`: binding table, per-tick evaluation and completion batches
//!
//! Everything here is driven by an external clock. Nothing blocks, spawns or locks.

mod animator;
mod ease;
mod group;
mod lerp;
mod property;
mod track;

pub use animator::{Animator, AnyTrack};
pub use ease::Easing;
pub use group::{GroupId, OnComplete};
pub use lerp::Interpolate;
pub use property::{AnimatedValue, PropertyId, PropertyKind, PropertyTarget};
pub use track::{Direction, Iteration, Keyframe, KeyframeTrack, KeyframeTrackBuilder};
