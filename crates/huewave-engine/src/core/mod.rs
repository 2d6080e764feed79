//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the effect:
//! a per-frame context, resize notifications and the host-surface view.

mod app;
mod ctx;
mod host;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_size;
pub use host::HostSurface;
