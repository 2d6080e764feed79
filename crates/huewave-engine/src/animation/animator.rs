use crate::coords::Vec2;
use crate::error::ConstructionError;
use crate::paint::Rgba8;

use super::group::{AnimationGroup, GroupId, OnComplete};
use super::property::{AnimatedValue, PropertyId, PropertyKind, PropertyTarget};
use super::track::{Iteration, KeyframeTrack};

/// A keyframe track of any supported property type.
#[derive(Debug, Clone)]
pub enum AnyTrack {
    Vector(KeyframeTrack<Vec2>),
    Color(KeyframeTrack<Rgba8>),
    Scalar(KeyframeTrack<f32>),
}

impl AnyTrack {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Vector(_) => PropertyKind::Vector,
            Self::Color(_) => PropertyKind::Color,
            Self::Scalar(_) => PropertyKind::Scalar,
        }
    }

    pub fn iteration(&self) -> Iteration {
        match self {
            Self::Vector(t) => t.iteration(),
            Self::Color(t) => t.iteration(),
            Self::Scalar(t) => t.iteration(),
        }
    }
}

impl From<KeyframeTrack<Vec2>> for AnyTrack {
    fn from(track: KeyframeTrack<Vec2>) -> Self {
        Self::Vector(track)
    }
}

impl From<KeyframeTrack<Rgba8>> for AnyTrack {
    fn from(track: KeyframeTrack<Rgba8>) -> Self {
        Self::Color(track)
    }
}

impl From<KeyframeTrack<f32>> for AnyTrack {
    fn from(track: KeyframeTrack<f32>) -> Self {
        Self::Scalar(track)
    }
}

/// Track paired with the value its property held when bound.
#[derive(Debug)]
enum ActiveTrack {
    Vector { track: KeyframeTrack<Vec2>, start: Vec2 },
    Color { track: KeyframeTrack<Rgba8>, start: Rgba8 },
    Scalar { track: KeyframeTrack<f32>, start: f32 },
}

impl ActiveTrack {
    fn bind(
        property: PropertyId,
        track: AnyTrack,
        current: AnimatedValue,
    ) -> Result<Self, ConstructionError> {
        let found = track.kind();
        match (track, current) {
            (AnyTrack::Vector(track), AnimatedValue::Vector(start)) => Ok(Self::Vector { track, start }),
            (AnyTrack::Color(track), AnimatedValue::Color(start)) => Ok(Self::Color { track, start }),
            (AnyTrack::Scalar(track), AnimatedValue::Scalar(start)) => Ok(Self::Scalar { track, start }),
            (_, current) => Err(ConstructionError::KindMismatch {
                property,
                expected: current.kind(),
                found,
            }),
        }
    }

    fn sample(&self, elapsed: f64) -> AnimatedValue {
        match self {
            Self::Vector { track, start } => AnimatedValue::Vector(track.sample(elapsed, start)),
            Self::Color { track, start } => AnimatedValue::Color(track.sample(elapsed, start)),
            Self::Scalar { track, start } => AnimatedValue::Scalar(track.sample(elapsed, start)),
        }
    }

    fn is_complete(&self, elapsed: f64) -> bool {
        match self {
            Self::Vector { track, .. } => track.is_complete(elapsed),
            Self::Color { track, .. } => track.is_complete(elapsed),
            Self::Scalar { track, .. } => track.is_complete(elapsed),
        }
    }
}

#[derive(Debug)]
struct Binding {
    property: PropertyId,
    track: ActiveTrack,
    started_at: f64,
    /// Set only for `Once` tracks started through a group.
    group: Option<GroupId>,
}

/// Binding table and completion batches for one timeline.
///
/// The animator owns no scene state. Each [`tick`](Self::tick) evaluates every
/// bound track against the supplied time and writes the results into a
/// [`PropertyTarget`]. At most one track is bound per property; binding a new
/// one retires the old.
///
/// Group continuations run from inside `tick`, after all of that tick's writes,
/// never from inside [`start_group`](Self::start_group).
#[derive(Debug, Default)]
pub struct Animator {
    now: f64,
    bindings: Vec<Binding>,
    groups: Vec<AnimationGroup>,
    next_group: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an animator whose clock already reads `now` seconds.
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Time of the last tick; new tracks start here.
    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn pending_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn is_animating(&self, property: PropertyId) -> bool {
        self.bindings.iter().any(|b| b.property == property)
    }

    /// Starts `tracks` together at the current time.
    ///
    /// Every track is validated against `target` before anything is bound, so a
    /// failed call leaves the animator untouched. `on_complete` runs exactly
    /// once, on the tick where the last `Once` member finishes. A group with no
    /// `Once` members completes on the next tick.
    pub fn start_group<T>(
        &mut self,
        tracks: Vec<(PropertyId, AnyTrack)>,
        on_complete: Option<OnComplete>,
        target: &T,
    ) -> Result<GroupId, ConstructionError>
    where
        T: PropertyTarget + ?Sized,
    {
        let mut prepared = Vec::with_capacity(tracks.len());
        for (property, track) in tracks {
            let current = target
                .read(property)
                .ok_or(ConstructionError::UnknownProperty(property))?;
            let once = track.iteration() == Iteration::Once;
            prepared.push((property, ActiveTrack::bind(property, track, current)?, once));
        }

        let id = GroupId(self.next_group);
        self.next_group += 1;

        let pending = prepared.iter().filter(|(_, _, once)| *once).count();
        log::debug!(
            "starting group {} at {:.3}s: {} track(s), {} counted for completion",
            id.0,
            self.now,
            prepared.len(),
            pending
        );
        self.groups.push(AnimationGroup::new(id, pending, on_complete));

        for (property, track, once) in prepared {
            self.retire(property);
            self.bindings.push(Binding {
                property,
                track,
                started_at: self.now,
                group: once.then_some(id),
            });
        }

        Ok(id)
    }

    /// Binds a single track outside of any group.
    pub fn start<T>(
        &mut self,
        property: PropertyId,
        track: impl Into<AnyTrack>,
        target: &T,
    ) -> Result<(), ConstructionError>
    where
        T: PropertyTarget + ?Sized,
    {
        let current = target
            .read(property)
            .ok_or(ConstructionError::UnknownProperty(property))?;
        let track = ActiveTrack::bind(property, track.into(), current)?;
        self.retire(property);
        self.bindings.push(Binding {
            property,
            track,
            started_at: self.now,
            group: None,
        });
        Ok(())
    }

    /// Advances to `now`, writes every bound property and returns the groups
    /// that completed on this tick, in creation order.
    pub fn tick<T>(&mut self, now: f64, target: &mut T) -> Vec<GroupId>
    where
        T: PropertyTarget + ?Sized,
    {
        self.now = now;

        let mut finished = Vec::new();
        self.bindings.retain(|binding| {
            let elapsed = now - binding.started_at;
            let value = binding.track.sample(elapsed);
            if !target.write(binding.property, value) {
                log::warn!("dropping write to {:?}: target rejected it", binding.property);
            }

            if binding.track.is_complete(elapsed) {
                log::trace!("{:?} finished at {:.3}s", binding.property, now);
                if let Some(group) = binding.group {
                    finished.push(group);
                }
                return false;
            }
            true
        });

        for id in finished {
            self.member_finished(id);
        }

        let (done, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.groups)
            .into_iter()
            .partition(AnimationGroup::is_done);
        self.groups = pending;

        let mut completed = Vec::with_capacity(done.len());
        for group in done {
            log::debug!("group {} completed at {:.3}s", group.id().0, now);
            completed.push(group.id());
            group.fire();
        }
        completed
    }

    fn retire(&mut self, property: PropertyId) {
        let Some(idx) = self.bindings.iter().position(|b| b.property == property) else {
            return;
        };
        let old = self.bindings.remove(idx);
        log::trace!("retiring track on {:?}", property);
        if let Some(id) = old.group {
            self.member_finished(id);
        }
    }

    fn member_finished(&mut self, id: GroupId) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.id() == id) {
            group.member_finished();
            log::trace!("group {} has {} pending member(s)", id.0, group.pending());
        }
    }
}
