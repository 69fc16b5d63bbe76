//! Resolved style with all values concrete.

use std::collections::BTreeMap;

use crate::types::{ButtonState, Color, Font, ImageHandle, ImageSide};

/// Final button configuration produced by composition.
///
/// This is what a button is constructed from. Fonts are concrete and no
/// template layer is referenced any more. `None` fields were not set by any
/// layer; the widget applies its own defaults for those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    // === Geometry ===
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub corner_radius: Option<u32>,
    pub border_width: Option<u32>,

    // === Colors ===
    pub fill_color: Option<Color>,
    pub hover_color: Option<Color>,
    pub border_color: Option<Color>,
    pub text_color: Option<Color>,
    pub text_color_disabled: Option<Color>,

    // === Content ===
    /// Label font.
    pub font: Option<Font>,
    /// Label text. Empty when an image is shown without text.
    pub text: String,
    /// Image shown on the button.
    pub image: Option<ImageHandle>,
    /// Side of the text the image is placed on; set only with an image.
    pub compound: Option<ImageSide>,

    // === Interaction ===
    pub state: Option<ButtonState>,
    pub cursor: Option<String>,

    /// Host keyword arguments without a dedicated field.
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ResolvedStyle {
    /// Look up a host keyword argument that has no dedicated field.
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Whether the button shows an image.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
