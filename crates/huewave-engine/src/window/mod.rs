//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and windows, reports logical-size changes and
//! drives one frame per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
