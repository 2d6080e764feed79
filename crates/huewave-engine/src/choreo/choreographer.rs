use crate::animation::{
    Animator, AnyTrack, Direction, Easing, GroupId, Iteration, KeyframeTrack, PropertyId,
};
use crate::coords::Vec2;
use crate::error::ConstructionError;
use crate::paint::{GradientBrush, Rgba8};
use crate::scene::Scene;

use super::config::{ChoreoConfig, StopPalette};

/// Index of the first animated stop.
pub const STOP_1: usize = 0;
/// Index of the second animated stop.
pub const STOP_2: usize = 1;

/// Degrees swept by one rotation pass.
const FULL_TURN_DEG: f32 = 360.0;

/// Choreography state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// End-point sweep running; nothing else animates.
    Entrance,
    /// Color cycling and rotation running forever. Terminal.
    Steady,
}

/// Entrance sweep: end point from its bound value to (1, 1), once.
pub fn entrance_track(config: &ChoreoConfig) -> Result<KeyframeTrack<Vec2>, ConstructionError> {
    KeyframeTrack::builder(config.entrance_secs)
        .keyframe(1.0, Vec2::one(), Easing::Linear)
        .iteration(Iteration::Once)
        .build()
}

/// Alternating three-color cycle for one stop.
pub fn color_cycle_track(
    duration: f64,
    colors: &StopPalette,
) -> Result<KeyframeTrack<Rgba8>, ConstructionError> {
    KeyframeTrack::builder(duration)
        .keyframe(0.0, colors[0], Easing::Linear)
        .keyframe(0.5, colors[1], Easing::Linear)
        .keyframe(1.0, colors[2], Easing::Linear)
        .iteration(Iteration::Forever)
        .direction(Direction::Alternate)
        .build()
}

/// Full revolution from the bound angle, looping. 360° and 0° coincide, so the wrap is seamless.
pub fn rotation_track(duration: f64) -> Result<KeyframeTrack<f32>, ConstructionError> {
    KeyframeTrack::builder(duration)
        .keyframe(1.0, FULL_TURN_DEG, Easing::Linear)
        .iteration(Iteration::Forever)
        .build()
}

/// Follow-on tracks, built and validated up front, bound on entering `Steady`.
#[derive(Debug, Clone)]
struct SteadyTracks {
    stop1: KeyframeTrack<Rgba8>,
    stop2: KeyframeTrack<Rgba8>,
    rotation: KeyframeTrack<f32>,
}

impl SteadyTracks {
    fn build(config: &ChoreoConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            stop1: color_cycle_track(config.color_cycle_secs, &config.palette.stop1)?,
            stop2: color_cycle_track(config.color_cycle_secs, &config.palette.stop2)?,
            rotation: rotation_track(config.rotation_secs)?,
        })
    }

    fn bindings(&self) -> Vec<(PropertyId, AnyTrack)> {
        vec![
            (PropertyId::StopColor(STOP_1), self.stop1.clone().into()),
            (PropertyId::StopColor(STOP_2), self.stop2.clone().into()),
            (PropertyId::RotationAngle, self.rotation.clone().into()),
        ]
    }
}

/// Drives the gradient effect: a one-shot entrance, then looping color and rotation.
///
/// The choreographer owns its animator and the prebuilt follow-on tracks. The
/// scene is passed in on every call; nothing is captured.
#[derive(Debug)]
pub struct Choreographer {
    animator: Animator,
    phase: Phase,
    entrance: GroupId,
    steady: SteadyTracks,
}

impl Choreographer {
    /// Builds a scene whose brush matches `config`'s entrance colors.
    pub fn scene(config: &ChoreoConfig) -> Result<Scene, ConstructionError> {
        Ok(Scene::new(GradientBrush::new(config.initial_stops())?))
    }

    /// Validates every track and starts the entrance at `now`.
    pub fn start(config: &ChoreoConfig, scene: &Scene, now: f64) -> Result<Self, ConstructionError> {
        let entrance = entrance_track(config)?;
        let steady = SteadyTracks::build(config)?;

        let mut animator = Animator::starting_at(now);
        let entrance = animator.start_group(vec![(PropertyId::EndPoint, entrance.into())], None, scene)?;
        log::info!("entrance started at {now:.3}s ({}s sweep)", config.entrance_secs);

        Ok(Self {
            animator,
            phase: Phase::Entrance,
            entrance,
            steady,
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Advances every track to `now` and enters `Steady` on the entrance's completion.
    ///
    /// Steady tracks start at the time of the tick that observed the completion.
    pub fn tick(&mut self, now: f64, scene: &mut Scene) -> Result<(), ConstructionError> {
        let completed = self.animator.tick(now, scene);
        if self.phase == Phase::Entrance && completed.contains(&self.entrance) {
            self.enter_steady(scene)?;
        }
        Ok(())
    }

    fn enter_steady(&mut self, scene: &Scene) -> Result<(), ConstructionError> {
        self.animator.start_group(self.steady.bindings(), None, scene)?;
        self.phase = Phase::Steady;
        log::info!("entrance finished; color cycling and rotation started at {:.3}s", self.animator.now());
        Ok(())
    }
}
