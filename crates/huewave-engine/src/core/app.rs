use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::coords::Vec2;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called when a window's logical size changes. `old_size` is the size
    /// last reported for that window (zero before the first report).
    fn on_resize(&mut self, window_id: WindowId, new_size: Vec2, old_size: Vec2) -> AppControl {
        let _ = (window_id, new_size, old_size);
        AppControl::Continue
    }

    /// Called for raw window events, before the runtime's own handling.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per display refresh per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
