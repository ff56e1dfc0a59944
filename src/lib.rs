//! Viewbadge attaches notification badges to host views.
//!
//! A badge is a filled circle, or a pill when it carries a label, pinned to one
//! corner of a host view so that it straddles the host's edge. This crate owns
//! the *decisions* (size, placement, visibility, transitions) and leaves the
//! drawing to the embedding UI toolkit through [`HostBinding`].
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`BadgeConfiguration`] (builder or JSON) picks kind,
//!    colors, font, alignment and transitions.
//! 2. **Size**: [`compute_size`] turns cached [`BadgeMetrics`], the label
//!    measurement and the host orientation into a [`BadgeSize`].
//! 3. **Place**: [`resolve_position`] maps corner + offset + sizes to an origin;
//!    [`layout_badge`] produces the frame and corner radius.
//! 4. **Present**: [`Badges`] pushes frames and visibility to the binding and
//!    dispatches [`Transition`]s on show/hide.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never fails at runtime**: lifecycle calls on a host without a badge
//!   are no-ops; only configuration loading returns [`BadgeResult`].
//! - **Single-threaded**: everything runs on the UI thread; animations are
//!   fire-and-forget descriptions ([`Animation`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod badge;
mod config;
mod effects;
mod foundation;
mod geometry;
mod host;
mod sizing;

pub use animation::anim::{Animation, AnimationTrack, AnimationTracks, Completion, Curve};
pub use animation::ease::{Ease, Spring};
pub use badge::registry::{BadgeStatus, Badges};
pub use badge::state::BadgeState;
pub use config::dsl::BadgeConfigBuilder;
pub use config::model::{BadgeConfiguration, BadgeKind, Font, FontFamily, TextAlignment};
pub use effects::transitions::{
    AppearTransition, DisappearTransition, POP_DURATION, PopAppear, SIMPLE_DURATION,
    SimpleAppear, SimpleDisappear, Transition, TransitionTargets, parse_appear_transition,
    parse_disappear_transition,
};
pub use foundation::color::Rgba8;
pub use foundation::core::{
    Affine, Orientation, Point, Rect, ShapeHandle, Size, Vec2, scale_transform,
};
pub use foundation::error::{BadgeError, BadgeResult};
pub use geometry::alignment::{BadgeAlignment, resolve_position};
pub use host::binding::{
    BadgeShapes, HostBinding, LabelStyle, Shadow, ShapeSink, ShapeSpec, ShapeStyle,
};
pub use sizing::engine::{
    BadgeLayout, BadgeMetrics, BadgeSize, PADDING_WIDTH, compute_size, layout_badge,
};
