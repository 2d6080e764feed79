use crate::core::HostSurface;
use crate::coords::Vec2;

use super::Scene;

/// Applies host-surface resizes to the scene.
///
/// Touches only the visual size and the brush's rotation center, neither of
/// which any track writes, so in-flight animations are unaffected.
#[derive(Debug, Default)]
pub struct ResizeHandler {
    applied: Option<Vec2>,
}

impl ResizeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last size written to the scene, if any.
    #[inline]
    pub fn applied(&self) -> Option<Vec2> {
        self.applied
    }

    /// Handles a resize notification. Returns false (and writes nothing) when
    /// the size did not change.
    ///
    /// Degenerate sizes are accepted as-is.
    pub fn on_resize(&mut self, scene: &mut Scene, new_size: Vec2, old_size: Vec2) -> bool {
        if new_size == old_size {
            return false;
        }

        scene.set_visual_size(new_size);
        scene.set_center_point(new_size.halved());
        self.applied = Some(new_size);

        log::info!(
            "surface resized {}x{} -> {}x{}",
            old_size.x,
            old_size.y,
            new_size.x,
            new_size.y
        );
        true
    }

    /// Pulls the current size from `host` and applies it as a resize from the
    /// last applied size (or the visual's size before the first resize).
    pub fn sync<H>(&mut self, scene: &mut Scene, host: &H) -> bool
    where
        H: HostSurface + ?Sized,
    {
        let old = self.applied.unwrap_or(scene.visual().size);
        self.on_resize(scene, host.current_size(), old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PropertyTarget;
    use crate::paint::{ColorStop, GradientBrush, Rgba8};

    struct FixedHost(Vec2);

    impl HostSurface for FixedHost {
        fn current_size(&self) -> Vec2 {
            self.0
        }
    }

    fn scene() -> Scene {
        let stops = vec![
            ColorStop::new(0.0, Rgba8::new(255, 0, 0, 255)),
            ColorStop::new(1.0, Rgba8::new(0, 0, 255, 255)),
        ];
        Scene::new(GradientBrush::new(stops).unwrap())
    }

    #[test]
    fn resize_sets_size_and_center() {
        let mut s = scene();
        let mut handler = ResizeHandler::new();
        assert!(handler.on_resize(&mut s, Vec2::new(200.0, 100.0), Vec2::zero()));
        assert_eq!(s.visual().size, Vec2::new(200.0, 100.0));
        assert_eq!(s.brush().center_point, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn same_size_writes_nothing() {
        let mut s = scene();
        let mut handler = ResizeHandler::new();
        handler.on_resize(&mut s, Vec2::new(200.0, 100.0), Vec2::zero());
        let revision = s.revision();
        let before = s.brush().clone();

        assert!(!handler.on_resize(&mut s, Vec2::new(200.0, 100.0), Vec2::new(200.0, 100.0)));
        assert_eq!(s.revision(), revision);
        assert_eq!(s.brush(), &before);
        assert_eq!(s.visual().size, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn degenerate_size_is_accepted() {
        let mut s = scene();
        let mut handler = ResizeHandler::new();
        handler.on_resize(&mut s, Vec2::new(640.0, 480.0), Vec2::zero());
        assert!(handler.on_resize(&mut s, Vec2::new(0.0, 480.0), Vec2::new(640.0, 480.0)));
        assert_eq!(s.brush().center_point, Vec2::new(0.0, 240.0));
    }

    #[test]
    fn resize_leaves_animated_properties_alone() {
        let mut s = scene();
        s.write(
            crate::animation::PropertyId::RotationAngle,
            crate::animation::AnimatedValue::Scalar(33.0),
        );
        let end = s.brush().end_point;

        ResizeHandler::new().on_resize(&mut s, Vec2::new(10.0, 10.0), Vec2::zero());
        assert_eq!(s.brush().rotation_deg, 33.0);
        assert_eq!(s.brush().end_point, end);
        assert_eq!(s.brush().stops()[0].color, Rgba8::new(255, 0, 0, 255));
    }

    #[test]
    fn sync_uses_last_applied_size() {
        let mut s = scene();
        let mut handler = ResizeHandler::new();
        assert!(handler.sync(&mut s, &FixedHost(Vec2::new(1280.0, 720.0))));
        assert_eq!(handler.applied(), Some(Vec2::new(1280.0, 720.0)));
        assert!(!handler.sync(&mut s, &FixedHost(Vec2::new(1280.0, 720.0))));
    }
}
