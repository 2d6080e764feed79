use crate::coords::Vec2;

/// What the engine needs from the surface it paints onto.
///
/// Resize notifications arrive separately through
/// [`App::on_resize`](super::App::on_resize).
pub trait HostSurface {
    /// Current logical size as `(width, height)`.
    fn current_size(&self) -> Vec2;
}
