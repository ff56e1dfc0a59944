use crate::{
    config::model::{BadgeConfiguration, BadgeKind, Font},
    foundation::core::{Orientation, Point, Rect, Size},
    geometry::alignment::{BadgeAlignment, resolve_position},
};

/// Horizontal room added around the label text.
pub const PADDING_WIDTH: f64 = 13.5;

#[derive(Clone, Debug, PartialEq)]
/// Sizing inputs cached from the configuration at setup.
///
/// Exactly one of `dot_height` / `height` is consulted, picked by whether
/// `dot_height` is set.
pub struct BadgeMetrics {
    /// Diameter; set for dot badges only.
    pub dot_height: Option<f64>,
    /// Capsule height of labeled badges.
    pub height: Option<f64>,
    /// Width cap before padding.
    pub max_width: Option<f64>,
    /// Room added around the label text.
    pub padding_width: f64,
    /// Scale for special hosts in landscape.
    pub landscape_scale: f64,
    /// Unscaled label font.
    pub font: Font,
}

impl BadgeMetrics {
    /// Metrics for `config`.
    pub fn from_config(config: &BadgeConfiguration) -> Self {
        let (dot_height, height) = match config.kind {
            BadgeKind::Dot => (Some(config.dot_height), None),
            BadgeKind::Normal => (None, config.badge_height),
        };
        Self {
            dot_height,
            height,
            max_width: config.max_width,
            padding_width: PADDING_WIDTH,
            landscape_scale: config.landscape_scale,
            font: config.font.clone(),
        }
    }

    /// Whether the badge has no label.
    pub fn is_dot(&self) -> bool {
        self.dot_height.is_some()
    }

    /// Scale for the current orientation; only special hosts shrink.
    pub fn scale_for(&self, host_is_special: bool, orientation: Orientation) -> f64 {
        if host_is_special && orientation.is_landscape() {
            self.landscape_scale
        } else {
            1.0
        }
    }

    /// Label font for `scale`; the base font when unscaled.
    pub fn font_for(&self, scale: f64) -> Font {
        if scale == 1.0 {
            self.font.clone()
        } else {
            self.font.with_size(self.font.size * scale)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Output of [`compute_size`].
pub struct BadgeSize {
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
    /// Orientation scale that was applied.
    pub scale: f64,
    /// Font the label must use for this size.
    pub font: Font,
}

impl BadgeSize {
    /// Width and height as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Compute the badge size.
///
/// `measure` reports the label's natural size once set in the resolved
/// font; it is not called in dot mode. Only width depends on the text, so a
/// labeled badge is a fixed-height capsule that stretches sideways.
pub fn compute_size(
    metrics: &BadgeMetrics,
    host_is_special: bool,
    orientation: Orientation,
    measure: impl FnOnce(&Font) -> Size,
) -> BadgeSize {
    let scale = metrics.scale_for(host_is_special, orientation);
    let font = metrics.font_for(scale);

    let (width, height) = match metrics.dot_height {
        Some(dot) => (dot * scale, dot * scale),
        None => {
            let label = measure(&font);
            let height = metrics.height.unwrap_or(0.0) * scale;
            let mut width = height.max(label.width * scale + metrics.padding_width);
            if let Some(max_width) = metrics.max_width
                && width > max_width
            {
                // The clamp re-adds padding on top of max_width.
                width = max_width + metrics.padding_width;
            }
            (width, height)
        }
    };

    BadgeSize {
        width,
        height,
        scale,
        font,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Final placement shared by circle and label.
pub struct BadgeLayout {
    /// Frame in host coordinates.
    pub frame: Rect,
    /// Always half the height, so ends are fully rounded.
    pub corner_radius: f64,
}

impl BadgeLayout {
    /// Top-left of the frame.
    pub fn origin(&self) -> Point {
        self.frame.origin()
    }
}

/// Place a badge of `size` on a host of `host_size`.
pub fn layout_badge(alignment: BadgeAlignment, host_size: Size, size: &BadgeSize) -> BadgeLayout {
    let origin = resolve_position(alignment, host_size, size.size());
    BadgeLayout {
        frame: Rect::from_origin_size(origin, size.size()),
        corner_radius: size.height / 2.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sizing/engine.rs"]
mod tests;
