use std::sync::Arc;

use crate::{
    config::model::{BadgeConfiguration, BadgeKind, Font, TextAlignment},
    effects::transitions::{AppearTransition, DisappearTransition, Transition},
    foundation::color::Rgba8,
    geometry::alignment::BadgeAlignment,
};

/// Chained builder over [`BadgeConfiguration`], starting from the defaults.
#[derive(Clone, Debug, Default)]
pub struct BadgeConfigBuilder {
    config: BadgeConfiguration,
}

impl BadgeConfigBuilder {
    /// Builder over the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dot or labeled badge.
    pub fn kind(mut self, kind: BadgeKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Shorthand for `kind(BadgeKind::Dot)`.
    pub fn dot(self) -> Self {
        self.kind(BadgeKind::Dot)
    }

    /// Corner and offset.
    pub fn alignment(mut self, alignment: BadgeAlignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Border color and width.
    pub fn border(mut self, color: Rgba8, width: f64) -> Self {
        self.config.border_color = color;
        self.config.border_width = width;
        self
    }

    /// Circle fill.
    pub fn circle_color(mut self, color: Rgba8) -> Self {
        self.config.circle_color = color;
        self
    }

    /// Dot diameter.
    pub fn dot_height(mut self, height: f64) -> Self {
        self.config.dot_height = height;
        self
    }

    /// Capsule height of labeled badges.
    pub fn badge_height(mut self, height: Option<f64>) -> Self {
        self.config.badge_height = height;
        self
    }

    /// Label font.
    pub fn font(mut self, font: Font) -> Self {
        self.config.font = font;
        self
    }

    /// Label text color.
    pub fn text_color(mut self, color: Rgba8) -> Self {
        self.config.text_color = color;
        self
    }

    /// Label text alignment.
    pub fn text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.config.text_alignment = alignment;
        self
    }

    /// Width cap; padding is added on top.
    pub fn max_width(mut self, max_width: Option<f64>) -> Self {
        self.config.max_width = max_width;
        self
    }

    /// Appear transition; `None` shows without animating.
    pub fn appear_animation(mut self, transition: Option<AppearTransition>) -> Self {
        self.config.appear_animation = transition;
        self
    }

    /// Disappear transition; `None` hides without animating.
    pub fn disappear_animation(mut self, transition: Option<DisappearTransition>) -> Self {
        self.config.disappear_animation = transition;
        self
    }

    /// Caller-provided appear transition.
    pub fn custom_appear(self, transition: Arc<dyn Transition>) -> Self {
        self.appear_animation(Some(AppearTransition::Custom(transition)))
    }

    /// Caller-provided disappear transition.
    pub fn custom_disappear(self, transition: Arc<dyn Transition>) -> Self {
        self.disappear_animation(Some(DisappearTransition::Custom(transition)))
    }

    /// Show and hide without animating.
    pub fn no_animation(self) -> Self {
        self.appear_animation(None).disappear_animation(None)
    }

    /// Drop shadow on or off.
    pub fn shadow(mut self, enabled: bool) -> Self {
        self.config.enable_shadow = enabled;
        self
    }

    /// Circle opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.config.opacity = opacity;
        self
    }

    /// Landscape scale for special hosts.
    pub fn landscape_scale(mut self, scale: f64) -> Self {
        self.config.landscape_scale = scale;
        self
    }

    /// Finish building.
    pub fn build(self) -> BadgeConfiguration {
        self.config
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/dsl.rs"]
mod tests;
