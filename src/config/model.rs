use crate::{
    effects::transitions::{AppearTransition, DisappearTransition},
    foundation::color::Rgba8,
    foundation::error::BadgeResult,
    geometry::alignment::BadgeAlignment,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Badge variant.
pub enum BadgeKind {
    /// Fixed-height capsule with a text label; width follows the text.
    #[default]
    Normal,
    /// Unlabeled circle of a fixed diameter.
    Dot,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Font family of the label.
pub enum FontFamily {
    /// Platform UI font.
    #[default]
    System,
    /// Font looked up by name on the host.
    Named(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Label font: family plus point size.
pub struct Font {
    /// Family; the system font when omitted.
    #[serde(default)]
    pub family: FontFamily,
    /// Point size.
    pub size: f64,
}

impl Font {
    /// System font at `size` points.
    pub fn system(size: f64) -> Self {
        Self {
            family: FontFamily::System,
            size,
        }
    }

    /// Named font at `size` points.
    pub fn named(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: FontFamily::Named(family.into()),
            size,
        }
    }

    /// Same family at another size.
    pub fn with_size(&self, size: f64) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(13.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal alignment of the label text.
pub enum TextAlignment {
    /// Flush left.
    Left,
    /// Centered (default).
    #[default]
    Center,
    /// Flush right.
    Right,
    /// Justified across the frame.
    Justified,
    /// Follows the script direction.
    Natural,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Immutable description of a badge's appearance and behavior.
///
/// Missing JSON fields take the defaults below. Values are not validated;
/// odd inputs (a negative `max_width`, say) produce whatever the layout
/// arithmetic makes of them.
pub struct BadgeConfiguration {
    /// Dot or labeled badge.
    pub kind: BadgeKind,
    /// Corner and offset.
    pub alignment: BadgeAlignment,
    /// Border stroke color.
    pub border_color: Rgba8,
    /// Border stroke width in points.
    pub border_width: f64,
    /// Fill of the circle.
    pub circle_color: Rgba8,
    /// Diameter in dot mode.
    pub dot_height: f64,
    /// Capsule height in normal mode.
    pub badge_height: Option<f64>,
    /// Label font.
    pub font: Font,
    /// Label text color.
    pub text_color: Rgba8,
    /// Label text alignment.
    pub text_alignment: TextAlignment,
    /// Width cap for labeled badges; padding is added on top.
    pub max_width: Option<f64>,
    /// `None` shows without animating.
    pub appear_animation: Option<AppearTransition>,
    /// `None` hides without animating.
    pub disappear_animation: Option<DisappearTransition>,
    /// Draw a drop shadow under the circle.
    pub enable_shadow: bool,
    /// Opacity of the circle in `[0, 1]`.
    pub opacity: f64,
    /// Scale applied to special hosts in landscape.
    pub landscape_scale: f64,
}

impl Default for BadgeConfiguration {
    fn default() -> Self {
        Self {
            kind: BadgeKind::Normal,
            alignment: BadgeAlignment::default(),
            border_color: Rgba8::CLEAR,
            border_width: 0.0,
            circle_color: Rgba8::SYSTEM_RED,
            dot_height: 9.0,
            badge_height: Some(21.0),
            font: Font::default(),
            text_color: Rgba8::WHITE,
            text_alignment: TextAlignment::Center,
            max_width: None,
            appear_animation: Some(AppearTransition::SimpleAppear),
            disappear_animation: Some(DisappearTransition::SimpleDisappear),
            enable_shadow: false,
            opacity: 1.0,
            landscape_scale: 0.75,
        }
    }
}

impl BadgeConfiguration {
    /// Chained builder starting from the defaults.
    pub fn builder() -> crate::config::dsl::BadgeConfigBuilder {
        crate::config::dsl::BadgeConfigBuilder::new()
    }

    /// Defaults with [`BadgeKind::Dot`].
    pub fn dot() -> Self {
        Self {
            kind: BadgeKind::Dot,
            ..Self::default()
        }
    }

    /// Parse JSON; missing fields take the defaults.
    pub fn from_json_str(s: &str) -> BadgeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty JSON. Fails when a `Custom` transition is configured.
    pub fn to_json_string(&self) -> BadgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
