use std::{fmt, sync::Arc, time::Duration};

use crate::{
    animation::{
        anim::{Animation, Completion, Curve},
        ease::Spring,
    },
    foundation::core::{Affine, ShapeHandle, scale_transform},
    foundation::error::{BadgeError, BadgeResult},
    host::binding::ShapeSink,
};

/// Appear/disappear behavior over a badge's circle and optional label.
pub trait Transition: fmt::Debug {
    /// Set up the start state and dispatch the animation; returns before it
    /// runs.
    fn animate(&self, targets: &mut TransitionTargets<'_>);
}

/// The shapes a transition acts on, reached through the host's shape sink.
pub struct TransitionTargets<'a> {
    sink: &'a mut dyn ShapeSink,
    circle: ShapeHandle,
    label: Option<ShapeHandle>,
}

impl<'a> TransitionTargets<'a> {
    /// Targets for one badge's shapes.
    pub fn new(
        sink: &'a mut dyn ShapeSink,
        circle: ShapeHandle,
        label: Option<ShapeHandle>,
    ) -> Self {
        Self {
            sink,
            circle,
            label,
        }
    }

    /// Background circle.
    pub fn circle(&self) -> ShapeHandle {
        self.circle
    }

    /// Label, absent for dot badges.
    pub fn label(&self) -> Option<ShapeHandle> {
        self.label
    }

    fn handles(&self) -> Vec<ShapeHandle> {
        std::iter::once(self.circle).chain(self.label).collect()
    }

    /// Apply `transform` to circle and label.
    pub fn set_transform(&mut self, transform: Affine) {
        for h in self.handles() {
            self.sink.set_transform(h, transform);
        }
    }

    /// Show or hide circle and label.
    pub fn set_visible(&mut self, visible: bool) {
        for h in self.handles() {
            self.sink.set_visible(h, visible);
        }
    }

    /// Dispatch `animation` over circle and label; returns immediately.
    pub fn run(&mut self, animation: Animation) {
        let handles = self.handles();
        self.sink.run_animation(&handles, animation);
    }
}

/// Duration of [`SimpleAppear`] and [`SimpleDisappear`].
pub const SIMPLE_DURATION: Duration = Duration::from_millis(200);
/// Duration of [`PopAppear`].
pub const POP_DURATION: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Grow from nothing with an ease-in, then settle on identity.
pub struct SimpleAppear;

impl Transition for SimpleAppear {
    fn animate(&self, targets: &mut TransitionTargets<'_>) {
        targets.set_transform(scale_transform(0.0));
        targets.set_visible(true);
        targets.run(Animation {
            from_scale: 0.0,
            to_scale: 1.0,
            duration: SIMPLE_DURATION,
            curve: Curve::EASE_IN,
            completion: Completion {
                visible: None,
                reset_transform: true,
            },
        });
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Shrink to a speck with an ease-in, then hide.
pub struct SimpleDisappear;

impl Transition for SimpleDisappear {
    fn animate(&self, targets: &mut TransitionTargets<'_>) {
        targets.set_transform(Affine::IDENTITY);
        targets.run(Animation {
            from_scale: 1.0,
            to_scale: 0.1,
            duration: SIMPLE_DURATION,
            curve: Curve::EASE_IN,
            completion: Completion {
                visible: Some(false),
                reset_transform: true,
            },
        });
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Springy grow with overshoot.
pub struct PopAppear;

impl PopAppear {
    /// Underdamped spring used for the pop.
    pub const SPRING: Spring = Spring {
        damping_ratio: 0.5,
        initial_velocity: 0.0,
    };
}

impl Transition for PopAppear {
    fn animate(&self, targets: &mut TransitionTargets<'_>) {
        targets.set_transform(scale_transform(0.0));
        targets.set_visible(true);
        targets.run(Animation {
            from_scale: 0.0,
            to_scale: 1.0,
            duration: POP_DURATION,
            curve: Curve::Spring(Self::SPRING),
            completion: Completion::default(),
        });
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Appear strategy selected by a badge configuration.
pub enum AppearTransition {
    /// [`SimpleAppear`].
    #[default]
    SimpleAppear,
    /// [`PopAppear`].
    PopAppear,
    /// Caller-provided strategy; not serializable.
    #[serde(skip)]
    Custom(Arc<dyn Transition>),
}

impl PartialEq for AppearTransition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SimpleAppear, Self::SimpleAppear) | (Self::PopAppear, Self::PopAppear) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Transition for AppearTransition {
    fn animate(&self, targets: &mut TransitionTargets<'_>) {
        match self {
            Self::SimpleAppear => SimpleAppear.animate(targets),
            Self::PopAppear => PopAppear.animate(targets),
            Self::Custom(t) => t.animate(targets),
        }
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Disappear strategy selected by a badge configuration.
pub enum DisappearTransition {
    /// [`SimpleDisappear`].
    #[default]
    SimpleDisappear,
    /// Caller-provided strategy; not serializable.
    #[serde(skip)]
    Custom(Arc<dyn Transition>),
}

impl PartialEq for DisappearTransition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SimpleDisappear, Self::SimpleDisappear) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Transition for DisappearTransition {
    fn animate(&self, targets: &mut TransitionTargets<'_>) {
        match self {
            Self::SimpleDisappear => SimpleDisappear.animate(targets),
            Self::Custom(t) => t.animate(targets),
        }
    }
}

/// Parse an appear strategy name; `"none"` disables the animation.
pub fn parse_appear_transition(name: &str) -> BadgeResult<Option<AppearTransition>> {
    let name = name.trim().to_ascii_lowercase();
    match name.as_str() {
        "none" => Ok(None),
        "simple" | "simple_appear" => Ok(Some(AppearTransition::SimpleAppear)),
        "pop" | "pop_appear" => Ok(Some(AppearTransition::PopAppear)),
        "" => Err(BadgeError::config("appear transition name must be non-empty")),
        other => Err(BadgeError::config(format!(
            "unknown appear transition '{other}'"
        ))),
    }
}

/// Parse a disappear strategy name; `"none"` disables the animation.
pub fn parse_disappear_transition(name: &str) -> BadgeResult<Option<DisappearTransition>> {
    let name = name.trim().to_ascii_lowercase();
    match name.as_str() {
        "none" => Ok(None),
        "simple" | "simple_disappear" => Ok(Some(DisappearTransition::SimpleDisappear)),
        "" => Err(BadgeError::config(
            "disappear transition name must be non-empty",
        )),
        other => Err(BadgeError::config(format!(
            "unknown disappear transition '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
