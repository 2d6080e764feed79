mod trace;

use std::time::Duration;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::window::WindowId;

use huewave_engine::choreo::{ChoreoConfig, Choreographer};
use huewave_engine::core::{App, AppControl, FrameCtx};
use huewave_engine::coords::Vec2;
use huewave_engine::logging::{init_logging, LoggingConfig};
use huewave_engine::render::Rasterizer;
use huewave_engine::scene::{ResizeHandler, Scene};
use huewave_engine::window::{Runtime, RuntimeConfig};

use trace::TraceRasterizer;

/// The background effect: scene, choreography and the painter it feeds.
struct GradientBackground {
    scene: Scene,
    choreo: Choreographer,
    resize: ResizeHandler,
    rasterizer: Box<dyn Rasterizer>,
}

impl GradientBackground {
    fn new(config: &ChoreoConfig, rasterizer: Box<dyn Rasterizer>) -> Result<Self> {
        let scene = Choreographer::scene(config).context("invalid gradient brush")?;
        let choreo = Choreographer::start(config, &scene, 0.0).context("invalid choreography")?;
        Ok(Self {
            scene,
            choreo,
            resize: ResizeHandler::new(),
            rasterizer,
        })
    }
}

impl App for GradientBackground {
    fn on_resize(&mut self, _window_id: WindowId, new_size: Vec2, old_size: Vec2) -> AppControl {
        self.resize.on_resize(&mut self.scene, new_size, old_size);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if let Err(e) = self.choreo.tick(ctx.time.elapsed, &mut self.scene) {
            log::error!("choreography failed: {e}");
            return AppControl::Exit;
        }
        self.rasterizer.present(&self.scene, &ctx.time);
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ChoreoConfig::default();
    let app = GradientBackground::new(&config, Box::new(TraceRasterizer::new(Duration::from_millis(500))))?;

    Runtime::run(
        RuntimeConfig {
            title: "huewave".to_string(),
            initial_size: LogicalSize::new(960.0, 540.0),
        },
        app,
    )
}
