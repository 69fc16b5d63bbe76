//! Hover tooltip attached to a button.

/// A tooltip popup shown while its owner is hovered.
///
/// Once dismissed a tooltip never shows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    text: String,
    visible: bool,
    dismissed: bool,
}

impl Tooltip {
    /// Create a hidden tooltip.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: false,
            dismissed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Show the popup. Ignored after [`dismiss`](Self::dismiss).
    pub fn show(&mut self) {
        if self.dismissed || self.visible {
            return;
        }
        self.visible = true;
        tracing::trace!(target: "dixt::button", text = %self.text, "tooltip shown");
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            tracing::trace!(target: "dixt::button", "tooltip hidden");
        }
    }

    /// Hide the popup for good.
    pub fn dismiss(&mut self) {
        self.hide();
        self.dismissed = true;
    }
}
