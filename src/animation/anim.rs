use std::time::Duration;

use crate::{
    animation::ease::{Ease, Spring},
    foundation::core::{Affine, ShapeHandle, scale_transform},
    host::binding::ShapeSink,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Progress curve of a badge animation.
pub enum Curve {
    /// Fixed easing function.
    Ease(Ease),
    /// Damped spring settling within the duration.
    Spring(Spring),
}

impl Curve {
    /// UIKit-style ease-in.
    pub const EASE_IN: Self = Self::Ease(Ease::InQuad);

    fn apply(self, t: f64, duration_secs: f64) -> f64 {
        match self {
            Self::Ease(ease) => ease.apply(t),
            Self::Spring(spring) => spring.apply(t, duration_secs),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Actions applied once an animation runs to its end.
pub struct Completion {
    /// Visibility to set on every animated shape, if any.
    pub visible: Option<bool>,
    /// Reset the shape transform to identity.
    pub reset_transform: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A scale animation dispatched to the host binding.
///
/// The host runs it asynchronously, either with its native animation engine
/// or by sampling [`Animation::transform_at`] every frame (see
/// [`AnimationTracks`]), and applies [`Animation::finish`] at the end.
pub struct Animation {
    /// Uniform scale at the start.
    pub from_scale: f64,
    /// Uniform scale at the end.
    pub to_scale: f64,
    /// Total running time.
    pub duration: Duration,
    /// Progress curve.
    pub curve: Curve,
    /// Actions applied when the animation ends.
    pub completion: Completion,
}

impl Animation {
    /// Curve progress after `elapsed`; `1.0` once the duration has passed.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / total;
        self.curve.apply(t, total)
    }

    /// Interpolated scale after `elapsed`.
    pub fn scale_at(&self, elapsed: Duration) -> f64 {
        let p = self.progress_at(elapsed);
        self.from_scale + (self.to_scale - self.from_scale) * p
    }

    /// Scale transform after `elapsed`.
    pub fn transform_at(&self, elapsed: Duration) -> Affine {
        scale_transform(self.scale_at(elapsed))
    }

    /// Whether the duration has passed.
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Land on the final transform and apply the completion actions.
    pub fn finish(&self, sink: &mut dyn ShapeSink, handles: &[ShapeHandle]) {
        let end = if self.completion.reset_transform {
            Affine::IDENTITY
        } else {
            scale_transform(self.to_scale)
        };
        for &handle in handles {
            sink.set_transform(handle, end);
            if let Some(visible) = self.completion.visible {
                sink.set_visible(handle, visible);
            }
        }
    }
}

#[derive(Clone, Debug)]
/// One in-flight animation over a set of shapes.
pub struct AnimationTrack {
    handles: Vec<ShapeHandle>,
    animation: Animation,
    elapsed: Duration,
}

impl AnimationTrack {
    /// Track at the start of `animation`.
    pub fn new(handles: &[ShapeHandle], animation: Animation) -> Self {
        Self {
            handles: handles.to_vec(),
            animation,
            elapsed: Duration::ZERO,
        }
    }

    /// Animated shapes.
    pub fn handles(&self) -> &[ShapeHandle] {
        &self.handles
    }

    /// Animation being played.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Time played so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Step the track by `dt`, writing the sampled transform.
    ///
    /// Returns `true` once the track has finished and its completion has run.
    pub fn advance(&mut self, dt: Duration, sink: &mut dyn ShapeSink) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.animation.is_finished_at(self.elapsed) {
            self.animation.finish(sink, &self.handles);
            return true;
        }
        let transform = self.animation.transform_at(self.elapsed);
        for &handle in &self.handles {
            sink.set_transform(handle, transform);
        }
        false
    }
}

#[derive(Clone, Debug, Default)]
/// Frame-driven player for hosts without a native animation engine.
///
/// Starting an animation on a shape that is already animating replaces the
/// older track without running its completion: the last call wins.
pub struct AnimationTracks {
    tracks: Vec<AnimationTrack>,
}

impl AnimationTracks {
    /// Player with no tracks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `animation` on `handles`, replacing tracks on the same shapes.
    pub fn start(&mut self, handles: &[ShapeHandle], animation: Animation) {
        let before = self.tracks.len();
        self.tracks
            .retain(|t| !t.handles.iter().any(|h| handles.contains(h)));
        if self.tracks.len() != before {
            tracing::trace!(
                replaced = before - self.tracks.len(),
                "animation replaced in-flight track"
            );
        }
        self.tracks.push(AnimationTrack::new(handles, animation));
    }

    /// Whether nothing is animating.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of in-flight tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// In-flight tracks in start order.
    pub fn iter(&self) -> impl Iterator<Item = &AnimationTrack> {
        self.tracks.iter()
    }

    /// Advance every track by `dt`, dropping the ones that finished.
    pub fn advance(&mut self, dt: Duration, sink: &mut dyn ShapeSink) {
        self.tracks.retain_mut(|t| !t.advance(dt, sink));
    }

    /// Run every track to its end.
    pub fn finish_all(&mut self, sink: &mut dyn ShapeSink) {
        for track in self.tracks.drain(..) {
            track.animation.finish(sink, &track.handles);
        }
    }

    /// Drop every track touching `handles` without completing it.
    pub fn cancel(&mut self, handles: &[ShapeHandle]) {
        self.tracks
            .retain(|t| !t.handles.iter().any(|h| handles.contains(h)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
