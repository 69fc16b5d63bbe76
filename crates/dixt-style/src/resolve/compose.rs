//! Layered style composition.

use crate::style::{ResolvedStyle, StyleProperties};
use crate::templates::TemplateStore;

use super::request::{StyleOverrides, StyleRequest};

/// Shape name whose corner radius is derived from the height.
pub const CIRCLE_SHAPE: &str = "circle";

/// Height assumed by the circle rule when no layer sets one.
pub const CIRCLE_FALLBACK_HEIGHT: u32 = 6;

/// Keys owned by text/image resolution; template values for them are dropped.
pub const CONTENT_KEYS: [&str; 3] = ["text", "image", "compound"];

/// Compose the final style for `request`.
///
/// Layers are merged right-biased and shallow, in this order: size template,
/// shape template, preset (when named), explicit overrides, custom size.
/// The font is then made concrete, the circle shape derives its corner
/// radius from the final height, and text and image are resolved.
///
/// Composition never fails. Unknown template names contribute nothing.
///
/// # Example
///
/// ```
/// use dixt_style::prelude::*;
///
/// let store = TemplateStore::builtin()?;
/// let style = compose(&store, &StyleRequest::new("OK").with_shape("circle"));
///
/// let height = style.height.unwrap_or(0);
/// assert_eq!(style.corner_radius, Some(height / 2));
/// assert!(style.font.is_some());
/// # Ok::<(), dixt_style::TemplateLoadError>(())
/// ```
#[tracing::instrument(
    target = "dixt_style::compose",
    level = "trace",
    skip_all,
    fields(size = %request.size, shape = %request.shape, preset = ?request.preset)
)]
pub fn compose(store: &TemplateStore, request: &StyleRequest) -> ResolvedStyle {
    let mut layers = store.lookup_size(&request.size).clone();
    layers.merge(store.lookup_shape(&request.shape));

    if let Some(preset) = request.active_preset() {
        layers.merge(store.lookup_preset(preset));
    }

    apply_overrides(&mut layers, &request.overrides);

    if let Some(custom) = &request.custom_size {
        merge_some(&mut layers.width, custom.width);
        merge_some(&mut layers.height, custom.height);
        merge_some(&mut layers.font, custom.font.clone());
    }

    let StyleProperties {
        width,
        height,
        mut corner_radius,
        border_width,
        fill_color,
        hover_color,
        border_color,
        text_color,
        text_color_disabled,
        font,
        state,
        cursor,
        mut extra,
    } = layers;

    for key in CONTENT_KEYS {
        if extra.remove(key).is_some() {
            tracing::debug!(target: "dixt_style::compose", key, "template value replaced by request content");
        }
    }

    let font = font.map(|f| f.materialize());

    if request.shape == CIRCLE_SHAPE {
        corner_radius = Some(height.unwrap_or(CIRCLE_FALLBACK_HEIGHT) / 2);
    }

    let (text, compound) = match request.image {
        Some(_) if request.show_text_with_image => {
            (request.text.clone(), Some(request.image_side))
        }
        Some(_) => (String::new(), Some(request.image_side)),
        None => (request.text.clone(), None),
    };

    tracing::trace!(
        target: "dixt_style::compose",
        ?height,
        ?corner_radius,
        has_image = request.image.is_some(),
        "style composed"
    );

    ResolvedStyle {
        width,
        height,
        corner_radius,
        border_width,
        fill_color,
        hover_color,
        border_color,
        text_color,
        text_color_disabled,
        font,
        text,
        image: request.image,
        compound,
        state,
        cursor,
        extra,
    }
}

fn apply_overrides(layers: &mut StyleProperties, overrides: &StyleOverrides) {
    merge_some(&mut layers.text_color, overrides.text_color.clone());
    merge_some(&mut layers.text_color_disabled, overrides.text_color_disabled.clone());
    merge_some(&mut layers.fill_color, overrides.fill_color.clone());
    merge_some(&mut layers.hover_color, overrides.hover_color.clone());
    merge_some(&mut layers.border_color, overrides.border_color.clone());
    merge_some(&mut layers.border_width, overrides.border_width);
}

// Absent never clears.
fn merge_some<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
