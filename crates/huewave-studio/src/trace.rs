use std::time::{Duration, Instant};

use huewave_engine::render::Rasterizer;
use huewave_engine::scene::Scene;
use huewave_engine::time::FrameTime;

/// Rasterizer stand-in that reports the live brush at a fixed interval.
pub struct TraceRasterizer {
    interval: Duration,
    last_report: Option<Instant>,
    last_revision: u64,
    frames: u64,
}

impl TraceRasterizer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_report: None,
            last_revision: 0,
            frames: 0,
        }
    }
}

impl Rasterizer for TraceRasterizer {
    fn present(&mut self, scene: &Scene, time: &FrameTime) {
        self.frames += 1;

        let due = self
            .last_report
            .is_none_or(|at| time.now.saturating_duration_since(at) >= self.interval);
        if !due || scene.revision() == self.last_revision {
            return;
        }

        let brush = scene.brush();
        let colors: Vec<[u8; 4]> = brush.stops().iter().map(|s| s.color.to_array()).collect();
        log::info!(
            "t={:.2}s frame={} fps~{:.0} size={:.0}x{:.0} end=({:.3}, {:.3}) rot={:.1}° center=({:.0}, {:.0}) stops={:?}",
            time.elapsed,
            time.frame_index,
            if time.dt > 0.0 { 1.0 / time.dt } else { 0.0 },
            scene.visual().size.x,
            scene.visual().size.y,
            brush.end_point.x,
            brush.end_point.y,
            brush.rotation_deg,
            brush.center_point.x,
            brush.center_point.y,
            colors,
        );
        log::trace!("{} frames presented", self.frames);

        self.last_report = Some(time.now);
        self.last_revision = scene.revision();
    }
}
