//! Contract between the badge core and the embedding UI toolkit.
//!
//! The core never draws. It decides *where* the circle and label go, *when*
//! they are visible and *how* they animate, and pushes those decisions through
//! the traits below. A toolkit integration implements [`HostBinding`] once;
//! the transition strategies only see the narrower [`ShapeSink`].
//!
//! # Orientation changes
//!
//! [`HostBinding::subscribe_orientation_change`] registers interest for a host.
//! When the platform reports an orientation or bounds change, the integration
//! calls [`crate::Badges::orientation_changed`] for each subscribed host on the
//! same thread. [`HostBinding::unsubscribe`] is called on teardown so no event
//! is ever routed to a dropped badge.

use std::{fmt, hash::Hash};

use crate::{
    animation::anim::Animation,
    config::model::{BadgeConfiguration, BadgeKind, Font, TextAlignment},
    foundation::{
        color::Rgba8,
        core::{Affine, Orientation, Rect, ShapeHandle, Size, Vec2},
    },
};

/// Shape-level operations a transition or layout pass performs on the host.
pub trait ShapeSink {
    /// Position and size a shape in host coordinates.
    fn apply_frame(&mut self, handle: ShapeHandle, frame: Rect);

    /// Round the shape's corners.
    fn set_corner_radius(&mut self, handle: ShapeHandle, radius: f64);

    /// Show or hide a shape immediately.
    fn set_visible(&mut self, handle: ShapeHandle, visible: bool);

    /// Visibility as currently rendered, including changes made by finished
    /// animations.
    fn is_visible(&self, handle: ShapeHandle) -> bool;

    /// Transform about the shape's center.
    fn set_transform(&mut self, handle: ShapeHandle, transform: Affine);

    /// Replace the label text.
    fn set_text(&mut self, handle: ShapeHandle, text: &str);

    /// Replace the label font.
    fn set_font(&mut self, handle: ShapeHandle, font: &Font);

    /// Natural size of the label's current text in its current font.
    fn measure_label(&self, handle: ShapeHandle) -> Size;

    /// Start `animation` on `handles` and return without waiting for it.
    fn run_animation(&mut self, handles: &[ShapeHandle], animation: Animation);

    /// Stop any animation running on `handles` without applying its
    /// completion actions.
    fn cancel_animations(&mut self, handles: &[ShapeHandle]);
}

/// Attachment, bounds and orientation plumbing for host views.
pub trait HostBinding: ShapeSink {
    /// Identity of a host view.
    type Host: Copy + Eq + Hash + fmt::Debug;

    /// Insert the badge shapes into `host`, label above circle.
    fn attach_shapes(&mut self, host: Self::Host, spec: &ShapeSpec) -> BadgeShapes;

    /// Remove the shapes from `host`, stopping any animation on them.
    fn detach_shapes(&mut self, host: Self::Host, shapes: &BadgeShapes);

    /// Current size of `host`.
    fn current_bounds(&self, host: Self::Host) -> Size;

    /// Current interface orientation.
    fn current_orientation(&self) -> Orientation;

    /// Start routing orientation and bounds changes of `host` to the core.
    fn subscribe_orientation_change(&mut self, host: Self::Host);

    /// Stop routing events for `host`.
    fn unsubscribe(&mut self, host: Self::Host);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Handles of the shapes attached for one badge.
pub struct BadgeShapes {
    /// Background circle or capsule.
    pub circle: ShapeHandle,
    /// Present for normal (labeled) badges only.
    pub label: Option<ShapeHandle>,
}

impl BadgeShapes {
    /// Circle first, then the label if any.
    pub fn all(&self) -> impl Iterator<Item = ShapeHandle> + '_ {
        std::iter::once(self.circle).chain(self.label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Drop shadow under the circle.
pub struct Shadow {
    /// Shadow offset in points.
    pub offset: Vec2,
    /// Blur radius in points.
    pub radius: f64,
    /// Shadow opacity in `[0, 1]`.
    pub opacity: f64,
    /// Shadow color.
    pub color: Rgba8,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: Vec2::new(1.0, 1.0),
            radius: 1.0,
            opacity: 0.5,
            color: Rgba8::BLACK,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Look of the background circle.
pub struct ShapeStyle {
    /// Fill color.
    pub fill: Rgba8,
    /// Border stroke color.
    pub border_color: Rgba8,
    /// Border stroke width in points.
    pub border_width: f64,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
    /// Drop shadow, when enabled.
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Debug, PartialEq)]
/// Look of the label.
pub struct LabelStyle {
    /// Initial font; relayout may swap in a scaled copy.
    pub font: Font,
    /// Text color.
    pub text_color: Rgba8,
    /// Horizontal text alignment inside the frame.
    pub text_alignment: TextAlignment,
    /// Label background, clear so the circle shows through.
    pub background: Rgba8,
    /// Whether the label takes touches.
    pub interactive: bool,
}

#[derive(Clone, Debug, PartialEq)]
/// Everything the host needs to create the badge shapes.
pub struct ShapeSpec {
    /// Background circle style.
    pub circle: ShapeStyle,
    /// Label style; `None` for dot badges.
    pub label: Option<LabelStyle>,
}

impl ShapeSpec {
    /// Styles derived from a badge configuration.
    pub fn from_config(config: &BadgeConfiguration) -> Self {
        let circle = ShapeStyle {
            fill: config.circle_color,
            border_color: config.border_color,
            border_width: config.border_width,
            opacity: config.opacity,
            shadow: config.enable_shadow.then(Shadow::default),
        };
        let label = match config.kind {
            BadgeKind::Dot => None,
            BadgeKind::Normal => Some(LabelStyle {
                font: config.font.clone(),
                text_color: config.text_color,
                text_alignment: config.text_alignment,
                background: Rgba8::CLEAR,
                interactive: false,
            }),
        };
        Self { circle, label }
    }
}
