//! Style property value types.
//!
//! Template documents carry colors, fonts and a handful of enumerated
//! keywords. This module gives each of them a concrete type.
//!
//! # Example
//!
//! ```
//! use dixt_style::prelude::*;
//!
//! // A single color, or a (light, dark) pair
//! let fill = Color::new("#1F6AA5");
//! let text = Color::pair("white", "#DCE4EE");
//! assert_eq!(fill.for_mode(true), "#1F6AA5");
//! assert_eq!(text.for_mode(true), "#DCE4EE");
//!
//! // Fonts stay deferred until composition materializes them
//! let font = FontValue::deferred(14, FontWeight::Normal);
//! assert!(font.is_deferred());
//! assert_eq!(font.materialize().size(), 14);
//! ```

use serde::{Deserialize, Deserializer};

/// A color as the host framework accepts it.
///
/// Either a single color (a name such as `"white"` or a hex string), or a
/// pair holding the light-mode and dark-mode color. In template documents a
/// pair is written as a two element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// One color for both appearance modes.
    Single(String),
    /// `(light, dark)` colors.
    Pair(String, String),
}

impl Color {
    /// Create a single color.
    pub fn new(color: impl Into<String>) -> Self {
        Self::Single(color.into())
    }

    /// Create a light/dark color pair.
    pub fn pair(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self::Pair(light.into(), dark.into())
    }

    /// The color used in light mode.
    pub fn light(&self) -> &str {
        match self {
            Self::Single(c) | Self::Pair(c, _) => c,
        }
    }

    /// The color used in dark mode.
    pub fn dark(&self) -> &str {
        match self {
            Self::Single(c) | Self::Pair(_, c) => c,
        }
    }

    /// Pick the color for the given appearance mode.
    pub fn for_mode(&self, dark: bool) -> &str {
        if dark { self.dark() } else { self.light() }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Font weight keywords understood by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

fn default_font_size() -> u32 {
    FontSpec::DEFAULT_SIZE
}

/// A font description as written in a template: size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct FontSpec {
    /// Font size in points.
    #[serde(default = "default_font_size")]
    pub size: u32,
    /// Font weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontSpec {
    /// Size used when a template omits it.
    pub const DEFAULT_SIZE: u32 = 14;

    pub const fn new(size: u32, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, FontWeight::Normal)
    }
}

/// A concrete font, ready to hand to a widget.
///
/// `Font` does not reference font data; the host framework resolves family,
/// size and weight to an actual face when it draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    family: Option<String>,
    size: u32,
    weight: FontWeight,
}

impl Font {
    /// Create a font in the host's default family.
    pub fn new(spec: FontSpec) -> Self {
        tracing::trace!(
            target: "dixt_style::compose",
            size = spec.size,
            weight = spec.weight.as_str(),
            "creating font"
        );
        Self {
            family: None,
            size: spec.size,
            weight: spec.weight,
        }
    }

    /// Set the font family using builder pattern.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Font family, or `None` for the host default.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The size/weight this font was built from.
    pub fn spec(&self) -> FontSpec {
        FontSpec::new(self.size, self.weight)
    }
}

/// A font value inside a style layer.
///
/// Templates only describe fonts; creating the concrete [`Font`] is deferred
/// to composition so that loading templates stays free of host resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontValue {
    /// A description still waiting to be turned into a font.
    Deferred(FontSpec),
    /// An already materialized font.
    Concrete(Font),
}

impl FontValue {
    /// Create a deferred font value.
    pub fn deferred(size: u32, weight: FontWeight) -> Self {
        Self::Deferred(FontSpec::new(size, weight))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Turn this value into a concrete font.
    ///
    /// Deferred values create their font here; concrete values are returned
    /// unchanged.
    pub fn materialize(self) -> Font {
        match self {
            Self::Deferred(spec) => Font::new(spec),
            Self::Concrete(font) => font,
        }
    }

    /// The size/weight described by this value.
    pub fn spec(&self) -> FontSpec {
        match self {
            Self::Deferred(spec) => *spec,
            Self::Concrete(font) => font.spec(),
        }
    }
}

impl From<Font> for FontValue {
    fn from(font: Font) -> Self {
        Self::Concrete(font)
    }
}

impl From<FontSpec> for FontValue {
    fn from(spec: FontSpec) -> Self {
        Self::Deferred(spec)
    }
}

impl<'de> Deserialize<'de> for FontValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FontSpec::deserialize(deserializer).map(FontValue::Deferred)
    }
}

/// Interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    #[default]
    Normal,
    Disabled,
}

/// Where an image sits relative to the button text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl ImageSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Opaque handle to an image owned by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_pair_from_array() {
        let color: Color = serde_json::from_str(r##"["#A9A9A9", "#5A5A5A"]"##).unwrap();
        assert_eq!(color, Color::pair("#A9A9A9", "#5A5A5A"));
        assert_eq!(color.light(), "#A9A9A9");
        assert_eq!(color.dark(), "#5A5A5A");
    }

    #[test]
    fn single_color_serves_both_modes() {
        let color: Color = serde_json::from_str(r#""transparent""#).unwrap();
        assert_eq!(color.for_mode(false), "transparent");
        assert_eq!(color.for_mode(true), "transparent");
    }

    #[test]
    fn font_value_deserializes_deferred() {
        let font: FontValue = serde_json::from_str(r#"{"size": 18, "weight": "bold"}"#).unwrap();
        assert_eq!(font, FontValue::deferred(18, FontWeight::Bold));

        let defaults: FontValue = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults.spec(), FontSpec::default());
    }

    #[test]
    fn unknown_font_weight_is_rejected() {
        let result: Result<FontValue, _> = serde_json::from_str(r#"{"weight": "heavy"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn materialize_is_idempotent() {
        let font = FontValue::deferred(12, FontWeight::Normal).materialize();
        let again = FontValue::Concrete(font.clone()).materialize();
        assert_eq!(font, again);
        assert_eq!(again.spec(), FontSpec::new(12, FontWeight::Normal));
    }
}
