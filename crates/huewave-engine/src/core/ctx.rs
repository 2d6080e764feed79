use winit::window::{Window, WindowId};

use crate::coords::Vec2;
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::host::HostSurface;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size in logical pixels.
    pub fn logical_size(&self) -> Vec2 {
        logical_size(self.window)
    }
}

impl HostSurface for WindowCtx<'_> {
    fn current_size(&self) -> Vec2 {
        self.logical_size()
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

pub(crate) fn logical_size(window: &Window) -> Vec2 {
    let phys = window.inner_size();
    let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(window.scale_factor());
    Vec2::new(logi.width as f32, logi.height as f32)
}
