//! What a caller asks the composition engine for.

use crate::types::{Color, FontValue, ImageHandle, ImageSide};

/// Explicit per-call attribute overrides.
///
/// A `None` field inherits whatever the templates resolved; it never clears
/// a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub text_color: Option<Color>,
    pub text_color_disabled: Option<Color>,
    pub fill_color: Option<Color>,
    pub hover_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<u32>,
}

/// Caller-supplied geometry replacing the size template's.
///
/// Only the fields that are set replace resolved values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font: Option<FontValue>,
}

impl CustomSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            font: None,
        }
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: impl Into<FontValue>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// A request to compose a button style.
///
/// # Example
///
/// ```
/// use dixt_style::prelude::*;
///
/// let request = StyleRequest::new("Delete")
///     .with_size("large")
///     .with_shape("circle")
///     .with_preset("danger")
///     .with_fill_color(Color::new("#00FF00"));
///
/// assert_eq!(request.preset.as_deref(), Some("danger"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRequest {
    /// Size template name.
    pub size: String,
    /// Shape template name.
    pub shape: String,
    /// Preset template name; `None` or empty skips the preset layer.
    pub preset: Option<String>,
    pub overrides: StyleOverrides,
    pub custom_size: Option<CustomSize>,
    /// Button text.
    pub text: String,
    pub image: Option<ImageHandle>,
    /// Keep the text when an image is shown.
    pub show_text_with_image: bool,
    /// Side of the text the image goes on.
    pub image_side: ImageSide,
}

impl Default for StyleRequest {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE.to_string(),
            shape: Self::DEFAULT_SHAPE.to_string(),
            preset: None,
            overrides: StyleOverrides::default(),
            custom_size: None,
            text: String::new(),
            image: None,
            show_text_with_image: true,
            image_side: ImageSide::Left,
        }
    }
}

impl StyleRequest {
    pub const DEFAULT_SIZE: &'static str = "default";
    pub const DEFAULT_SHAPE: &'static str = "rounded";

    /// Create a request for a button labeled `text`, using the default size
    /// and shape.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.overrides.text_color = Some(color);
        self
    }

    pub fn with_text_color_disabled(mut self, color: Color) -> Self {
        self.overrides.text_color_disabled = Some(color);
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.overrides.fill_color = Some(color);
        self
    }

    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.overrides.hover_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.overrides.border_color = Some(color);
        self
    }

    pub fn with_border_width(mut self, width: u32) -> Self {
        self.overrides.border_width = Some(width);
        self
    }

    pub fn with_custom_size(mut self, custom_size: CustomSize) -> Self {
        self.custom_size = Some(custom_size);
        self
    }

    /// Show `image`, placed on `side` of the text.
    pub fn with_image(mut self, image: ImageHandle, side: ImageSide) -> Self {
        self.image = Some(image);
        self.image_side = side;
        self
    }

    pub fn with_text_with_image(mut self, show: bool) -> Self {
        self.show_text_with_image = show;
        self
    }

    /// The preset name, if the preset layer applies.
    pub fn active_preset(&self) -> Option<&str> {
        self.preset.as_deref().filter(|p| !p.is_empty())
    }
}
