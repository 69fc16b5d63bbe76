//! Style layer definition.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::{ButtonState, Color, FontValue};

/// One layer of button style attributes.
///
/// Every attribute the toolkit understands is an explicit field; `None`
/// means "not set by this layer" and lets earlier layers show through when
/// layers are merged. Keys the toolkit does not model are kept in
/// [`extra`](Self::extra) and merge the same way.
///
/// Field names follow the host framework's keyword names, so a template
/// entry like `{"fg_color": "#1F6AA5", "corner_radius": 8}` deserializes
/// directly into a layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleProperties {
    // === Geometry ===
    /// Widget width in pixels.
    pub width: Option<u32>,
    /// Widget height in pixels.
    pub height: Option<u32>,
    /// Corner rounding in pixels.
    pub corner_radius: Option<u32>,
    /// Border width in pixels.
    pub border_width: Option<u32>,

    // === Colors ===
    /// Button fill color. `fill_color` is accepted as an alias; a layer that
    /// sets both keys is rejected as a duplicate field.
    #[serde(rename = "fg_color", alias = "fill_color")]
    pub fill_color: Option<Color>,
    /// Fill color while hovered.
    pub hover_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Text color while disabled.
    pub text_color_disabled: Option<Color>,

    // === Typography ===
    /// Label font, deferred until composition.
    pub font: Option<FontValue>,

    // === Interaction ===
    /// Initial interaction state.
    pub state: Option<ButtonState>,
    /// Host cursor name shown over the button.
    pub cursor: Option<String>,

    /// Host keyword arguments without a dedicated field.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl StyleProperties {
    /// A layer that sets nothing.
    pub const EMPTY: StyleProperties = StyleProperties {
        width: None,
        height: None,
        corner_radius: None,
        border_width: None,
        fill_color: None,
        hover_color: None,
        border_color: None,
        text_color: None,
        text_color_disabled: None,
        font: None,
        state: None,
        cursor: None,
        extra: BTreeMap::new(),
    };

    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether this layer sets no attribute at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Merge another layer into this one.
    ///
    /// Only values set in `other` are copied; each copied value replaces
    /// whatever this layer held for the same key. Values are never merged
    /// deeply.
    pub fn merge(&mut self, other: &StyleProperties) {
        macro_rules! merge_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &other.$prop {
                        self.$prop = Some(value.clone());
                    }
                )+
            };
        }

        merge_if_set!(
            // Geometry
            width, height, corner_radius, border_width,
            // Colors
            fill_color, hover_color, border_color, text_color, text_color_disabled,
            // Typography
            font,
            // Interaction
            state, cursor,
        );

        for (key, value) in &other.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }

    /// Return `self` with `other` merged on top.
    pub fn merged(mut self, other: &StyleProperties) -> Self {
        self.merge(other);
        self
    }
}
