use crate::error::ConstructionError;

use super::{Easing, Interpolate};

/// How many times a track plays.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Iteration {
    /// A single pass; the final value is held afterwards.
    Once,
    /// Loops until the binding is replaced.
    Forever,
}

/// Playback direction across iterations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Normal,
    /// Odd iterations play backwards. Only meaningful with [`Iteration::Forever`].
    Alternate,
}

/// One anchor of a track.
///
/// `easing` shapes the segment that ends at this keyframe.
#[derive(Debug, Clone)]
pub struct Keyframe<T> {
    pub progress: f32,
    pub value: T,
    pub easing: Easing,
}

/// Keyframe animation for a single property type.
///
/// Keyframes are sorted by strictly increasing progress. Progress 0 and 1 are
/// optional: a missing endpoint evaluates to the value the property held when
/// the track was bound (the `start` argument of [`sample`](Self::sample)).
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T> {
    keyframes: Vec<Keyframe<T>>,
    duration: f64,
    iteration: Iteration,
    direction: Direction,
}

impl<T: Interpolate> KeyframeTrack<T> {
    /// Starts a builder. `duration` is the length of one pass, in seconds.
    pub fn builder(duration: f64) -> KeyframeTrackBuilder<T> {
        KeyframeTrackBuilder {
            duration,
            keyframes: Vec::new(),
            iteration: Iteration::Once,
            direction: Direction::Normal,
        }
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    /// Normalized progress after `elapsed` seconds of playback.
    ///
    /// Once: clamped into `[0, 1]`. Forever: wrapped, and reflected on odd
    /// iterations when alternating.
    pub fn progress_at(&self, elapsed: f64) -> f32 {
        let cycles = elapsed.max(0.0) / self.duration;
        match self.iteration {
            Iteration::Once => cycles.min(1.0) as f32,
            Iteration::Forever => {
                let iteration = cycles.floor();
                let p = cycles - iteration;
                let reversed = self.direction == Direction::Alternate && iteration % 2.0 == 1.0;
                if reversed { (1.0 - p) as f32 } else { p as f32 }
            }
        }
    }

    /// True once a `Once` track has reached the end of its pass. Never true for `Forever`.
    #[inline]
    pub fn is_complete(&self, elapsed: f64) -> bool {
        self.iteration == Iteration::Once && elapsed >= self.duration
    }

    /// Value after `elapsed` seconds, given the property's value at bind time.
    pub fn sample(&self, elapsed: f64, start: &T) -> T {
        self.sample_progress(self.progress_at(elapsed), start)
    }

    /// Value at normalized progress `p`.
    pub fn sample_progress(&self, p: f32, start: &T) -> T {
        let p = p.clamp(0.0, 1.0);
        // Non-empty by construction.
        let first = &self.keyframes[0];
        let last = &self.keyframes[self.keyframes.len() - 1];

        if p < first.progress {
            let t = first.easing.apply(p / first.progress);
            return T::lerp(start, &first.value, t);
        }

        if p >= last.progress {
            if last.progress >= 1.0 {
                return last.value.clone();
            }
            let t = (p - last.progress) / (1.0 - last.progress);
            return T::lerp(&last.value, start, t);
        }

        let idx = self.keyframes.partition_point(|k| k.progress <= p);
        let a = &self.keyframes[idx - 1];
        let b = &self.keyframes[idx];
        let t = b.easing.apply((p - a.progress) / (b.progress - a.progress));
        T::lerp(&a.value, &b.value, t)
    }
}

/// Builder for [`KeyframeTrack`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct KeyframeTrackBuilder<T> {
    duration: f64,
    keyframes: Vec<Keyframe<T>>,
    iteration: Iteration,
    direction: Direction,
}

impl<T: Interpolate> KeyframeTrackBuilder<T> {
    /// Adds a keyframe. A later keyframe at the same progress replaces the earlier one.
    pub fn keyframe(mut self, progress: f32, value: T, easing: Easing) -> Self {
        self.keyframes.push(Keyframe { progress, value, easing });
        self
    }

    pub fn iteration(mut self, iteration: Iteration) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn build(self) -> Result<KeyframeTrack<T>, ConstructionError> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ConstructionError::NonPositiveDuration { seconds: self.duration });
        }
        if self.keyframes.is_empty() {
            return Err(ConstructionError::EmptyKeyframes);
        }
        if let Some(bad) = self.keyframes.iter().find(|k| !(0.0..=1.0).contains(&k.progress)) {
            return Err(ConstructionError::ProgressOutOfRange { progress: bad.progress });
        }

        let mut sorted: Vec<Keyframe<T>> = Vec::with_capacity(self.keyframes.len());
        for key in self.keyframes {
            let idx = sorted.partition_point(|k| k.progress < key.progress);
            if sorted.get(idx).is_some_and(|k| k.progress == key.progress) {
                sorted[idx] = key;
            } else {
                sorted.insert(idx, key);
            }
        }

        Ok(KeyframeTrack {
            keyframes: sorted,
            duration: self.duration,
            iteration: self.iteration,
            direction: self.direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Rgba8;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn end_point_sweep() -> KeyframeTrack<Vec2> {
        KeyframeTrack::builder(3.0)
            .keyframe(1.0, Vec2::one(), Easing::Linear)
            .build()
            .unwrap()
    }

    fn scalar_loop(direction: Direction) -> KeyframeTrack<f32> {
        KeyframeTrack::builder(10.0)
            .keyframe(0.0, 0.0, Easing::Linear)
            .keyframe(1.0, 100.0, Easing::Linear)
            .iteration(Iteration::Forever)
            .direction(direction)
            .build()
            .unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_duration_is_rejected() {
        let err = KeyframeTrack::<f32>::builder(0.0)
            .keyframe(1.0, 1.0, Easing::Linear)
            .build()
            .unwrap_err();
        assert_eq!(err, ConstructionError::NonPositiveDuration { seconds: 0.0 });
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = KeyframeTrack::<f32>::builder(-2.0)
            .keyframe(1.0, 1.0, Easing::Linear)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConstructionError::NonPositiveDuration { .. }));
    }

    #[test]
    fn empty_keyframes_are_rejected() {
        let err = KeyframeTrack::<f32>::builder(1.0).build().unwrap_err();
        assert_eq!(err, ConstructionError::EmptyKeyframes);
    }

    #[test]
    fn progress_outside_unit_range_is_rejected() {
        let err = KeyframeTrack::<f32>::builder(1.0)
            .keyframe(1.5, 1.0, Easing::Linear)
            .build()
            .unwrap_err();
        assert_eq!(err, ConstructionError::ProgressOutOfRange { progress: 1.5 });
    }

    #[test]
    fn keyframes_are_sorted_and_deduplicated() {
        let track = KeyframeTrack::builder(1.0)
            .keyframe(1.0, 10.0_f32, Easing::Linear)
            .keyframe(0.5, 5.0, Easing::Linear)
            .keyframe(0.0, 0.0, Easing::Linear)
            .keyframe(0.5, 7.0, Easing::Linear)
            .build()
            .unwrap();

        let progress: Vec<f32> = track.keyframes().iter().map(|k| k.progress).collect();
        assert_eq!(progress, vec![0.0, 0.5, 1.0]);
        assert_eq!(track.keyframes()[1].value, 7.0);
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn once_progress_clamps() {
        let track = end_point_sweep();
        assert_eq!(track.progress_at(-1.0), 0.0);
        assert_eq!(track.progress_at(1.5), 0.5);
        assert_eq!(track.progress_at(3.0), 1.0);
        assert_eq!(track.progress_at(30.0), 1.0);
    }

    #[test]
    fn forever_progress_wraps() {
        let track = scalar_loop(Direction::Normal);
        assert!(approx(track.progress_at(2.5), 0.25));
        assert!(approx(track.progress_at(12.5), 0.25));
        assert_eq!(track.progress_at(10.0), 0.0);
    }

    #[test]
    fn alternate_progress_reflects_odd_iterations() {
        let track = scalar_loop(Direction::Alternate);
        assert!(approx(track.progress_at(2.5), 0.25));
        assert!(approx(track.progress_at(12.5), 0.75));
        assert_eq!(track.progress_at(10.0), 1.0);
        assert_eq!(track.progress_at(20.0), 0.0);
    }

    #[test]
    fn completion_only_for_once() {
        let once = end_point_sweep();
        assert!(!once.is_complete(2.999));
        assert!(once.is_complete(3.0));

        let forever = scalar_loop(Direction::Normal);
        assert!(!forever.is_complete(1_000.0));
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn implicit_start_keyframe_uses_bound_value() {
        let track = end_point_sweep();
        let start = Vec2::zero();
        assert_eq!(track.sample(0.0, &start), Vec2::zero());
        assert_eq!(track.sample(1.5, &start), Vec2::new(0.5, 0.5));
        assert_eq!(track.sample(3.0, &start), Vec2::one());
        assert_eq!(track.sample(10.0, &start), Vec2::one());
    }

    #[test]
    fn once_clamps_to_first_and_last_keyframes() {
        let track = KeyframeTrack::builder(4.0)
            .keyframe(0.0, 2.0_f32, Easing::Linear)
            .keyframe(1.0, 6.0, Easing::Linear)
            .build()
            .unwrap();
        for d in [0.0, -3.0] {
            assert_eq!(track.sample(d, &0.0), 2.0);
        }
        for d in [4.0, 4.5, 100.0] {
            assert_eq!(track.sample(d, &0.0), 6.0);
        }
    }

    #[test]
    fn implicit_end_keyframe_returns_to_start() {
        let track = KeyframeTrack::builder(1.0)
            .keyframe(0.5, 10.0_f32, Easing::Linear)
            .build()
            .unwrap();
        assert_eq!(track.sample_progress(0.5, &0.0), 10.0);
        assert!(approx(track.sample_progress(0.75, &0.0), 5.0));
        assert_eq!(track.sample_progress(1.0, &0.0), 0.0);
    }

    #[test]
    fn segment_easing_belongs_to_destination_keyframe() {
        let track = KeyframeTrack::builder(1.0)
            .keyframe(0.0, 0.0_f32, Easing::Linear)
            .keyframe(1.0, 1.0, Easing::InQuad)
            .build()
            .unwrap();
        assert!(approx(track.sample_progress(0.5, &0.0), 0.25));
    }

    #[test]
    fn color_midpoint_is_exact() {
        let start = Rgba8::from_argb(255, 251, 218, 97);
        let mid = Rgba8::from_argb(255, 65, 88, 208);
        let end = Rgba8::from_argb(255, 43, 210, 255);
        let track = KeyframeTrack::builder(10.0)
            .keyframe(0.0, start, Easing::Linear)
            .keyframe(0.5, mid, Easing::Linear)
            .keyframe(1.0, end, Easing::Linear)
            .iteration(Iteration::Forever)
            .direction(Direction::Alternate)
            .build()
            .unwrap();

        assert_eq!(track.sample_progress(0.5, &start), mid);
        assert_eq!(track.sample(5.0, &start), mid);
        assert_eq!(track.sample(15.0, &start), mid);
    }

    #[test]
    fn alternate_is_periodic_over_two_durations() {
        let track = scalar_loop(Direction::Alternate);
        for t in [0.0, 1.25, 3.5, 7.75, 10.0, 13.25, 19.5] {
            assert!(approx(track.sample(t, &0.0), track.sample(t + 20.0, &0.0)), "t = {t}");
        }
    }

    #[test]
    fn normal_loop_is_periodic_over_one_duration() {
        let track = scalar_loop(Direction::Normal);
        for t in [0.0, 1.25, 3.5, 7.75, 9.5] {
            assert!(approx(track.sample(t, &0.0), track.sample(t + 10.0, &0.0)), "t = {t}");
        }
    }
}
