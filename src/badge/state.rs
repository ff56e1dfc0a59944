use crate::{
    config::model::BadgeConfiguration,
    effects::transitions::{AppearTransition, DisappearTransition, Transition, TransitionTargets},
    foundation::core::{Affine, Orientation, Point, Size},
    geometry::alignment::BadgeAlignment,
    host::binding::{BadgeShapes, ShapeSink},
    sizing::engine::{BadgeLayout, BadgeMetrics, BadgeSize, compute_size, layout_badge},
};

#[derive(Clone, Debug)]
/// Per-host badge record.
///
/// Owned by exactly one registry entry; dropped when its host is torn down.
pub struct BadgeState {
    shapes: BadgeShapes,
    metrics: BadgeMetrics,
    alignment: BadgeAlignment,
    is_special_host: bool,
    position: Point,
    last_size: Option<BadgeSize>,
    appear: Option<AppearTransition>,
    disappear: Option<DisappearTransition>,
}

impl BadgeState {
    pub(crate) fn new(
        shapes: BadgeShapes,
        config: &BadgeConfiguration,
        is_special_host: bool,
    ) -> Self {
        Self {
            shapes,
            metrics: BadgeMetrics::from_config(config),
            alignment: config.alignment,
            is_special_host,
            position: Point::ZERO,
            last_size: None,
            appear: config.appear_animation.clone(),
            disappear: config.disappear_animation.clone(),
        }
    }

    /// Shapes attached for this badge.
    pub fn shapes(&self) -> &BadgeShapes {
        &self.shapes
    }

    /// Sizing inputs cached at setup.
    pub fn metrics(&self) -> &BadgeMetrics {
        &self.metrics
    }

    /// Corner and offset the badge is pinned to.
    pub fn alignment(&self) -> BadgeAlignment {
        self.alignment
    }

    /// Whether the host shrinks in landscape (toolbar-item style).
    pub fn is_special_host(&self) -> bool {
        self.is_special_host
    }

    /// Origin of the last computed frame.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size from the last layout pass, if one ran.
    pub fn last_size(&self) -> Option<&BadgeSize> {
        self.last_size.as_ref()
    }

    /// Transition played by an animated show.
    pub fn appear_transition(&self) -> Option<&AppearTransition> {
        self.appear.as_ref()
    }

    /// Transition played by an animated hide.
    pub fn disappear_transition(&self) -> Option<&DisappearTransition> {
        self.disappear.as_ref()
    }

    /// Replace the label text; empty text leaves it unchanged.
    pub(crate) fn set_text(&self, sink: &mut dyn ShapeSink, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(label) = self.shapes.label {
            sink.set_text(label, text);
        }
    }

    /// Recompute size and placement and push them to the host.
    pub(crate) fn relayout(
        &mut self,
        sink: &mut dyn ShapeSink,
        host_size: Size,
        orientation: Orientation,
    ) -> BadgeLayout {
        let label = self.shapes.label;
        let size = compute_size(&self.metrics, self.is_special_host, orientation, |font| {
            match label {
                Some(label) => {
                    sink.set_font(label, font);
                    sink.measure_label(label)
                }
                None => Size::ZERO,
            }
        });
        let layout = layout_badge(self.alignment, host_size, &size);

        sink.apply_frame(self.shapes.circle, layout.frame);
        if let Some(label) = label {
            sink.apply_frame(label, layout.frame);
        }
        sink.set_corner_radius(self.shapes.circle, layout.corner_radius);

        tracing::trace!(
            frame = ?layout.frame,
            scale = size.scale,
            "badge layout"
        );
        self.position = layout.origin();
        self.last_size = Some(size);
        layout
    }

    /// Dispatch the appear transition; `false` when none is configured.
    pub(crate) fn play_appear(&self, sink: &mut dyn ShapeSink) -> bool {
        let Some(appear) = &self.appear else {
            return false;
        };
        appear.animate(&mut TransitionTargets::new(
            sink,
            self.shapes.circle,
            self.shapes.label,
        ));
        true
    }

    /// Dispatch the disappear transition; `false` when none is configured.
    pub(crate) fn play_disappear(&self, sink: &mut dyn ShapeSink) -> bool {
        let Some(disappear) = &self.disappear else {
            return false;
        };
        disappear.animate(&mut TransitionTargets::new(
            sink,
            self.shapes.circle,
            self.shapes.label,
        ));
        true
    }

    /// Drop in-flight animations and restore the resting transform, so a
    /// stale completion cannot override a newer call.
    pub(crate) fn cancel_animations(&self, sink: &mut dyn ShapeSink) {
        let handles: Vec<_> = self.shapes.all().collect();
        sink.cancel_animations(&handles);
        for handle in handles {
            sink.set_transform(handle, Affine::IDENTITY);
        }
    }

    pub(crate) fn set_visible(&self, sink: &mut dyn ShapeSink, visible: bool) {
        for handle in self.shapes.all() {
            sink.set_visible(handle, visible);
        }
    }

    pub(crate) fn is_hidden(&self, sink: &dyn ShapeSink) -> bool {
        !sink.is_visible(self.shapes.circle)
    }
}
