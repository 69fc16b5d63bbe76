//! Styled button with an optional tooltip and busy spinner.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dixt::prelude::*;
//!
//! let store = TemplateStore::builtin()?;
//! let timers = Arc::new(SharedTimerManager::new());
//!
//! let style = compose(&store, &StyleRequest::new("Upload"));
//! let options = ButtonOptions::new().with_tooltip("Send to server");
//! let mut button = CustomButton::new(style, options, &store, timers.clone());
//!
//! button.show_spinner();
//! assert!(button.is_spinner_visible());
//!
//! button.destroy();
//! assert_eq!(timers.active_count(), 0);
//! # Ok::<(), dixt::style::TemplateLoadError>(())
//! ```

use std::sync::Arc;

use dixt_core::{Scheduler, Signal, TimerId};
use dixt_style::style::ResolvedStyle;
use dixt_style::templates::{ButtonTemplates, SymbolSet, TemplateStore};
use dixt_style::types::{ButtonState, Color, Font, ImageHandle, ImageSide};

use super::spinner::Spinner;
use super::tooltip::Tooltip;

/// Construction options that are not part of the style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOptions {
    /// Tooltip text; no tooltip is attached when `None`.
    pub tooltip: Option<String>,
    /// Create and start the spinner at construction.
    pub show_spinner: bool,
    /// Spinner symbol set name.
    pub spinner_name: String,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            tooltip: None,
            show_spinner: false,
            spinner_name: SymbolSet::FALLBACK_NAME.to_string(),
        }
    }
}

impl ButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    pub fn with_spinner_name(mut self, name: impl Into<String>) -> Self {
        self.spinner_name = name.into();
        self
    }
}

/// A styled button.
///
/// The button is built once from a [`ResolvedStyle`]. It may own a
/// [`Spinner`], shown at its trailing edge while busy, and a [`Tooltip`].
/// A visible spinner is always running and a hidden one is always stopped.
///
/// Destroying the button (explicitly or by dropping it) stops the spinner
/// and dismisses the tooltip.
///
/// # Signals
///
/// - `clicked`: Emitted when a click lands on an enabled button
pub struct CustomButton {
    style: ResolvedStyle,
    spinner_symbols: SymbolSet,
    spinner: Option<Spinner>,
    tooltip: Option<Tooltip>,
    scheduler: Arc<dyn Scheduler>,
    hovered: bool,
    destroyed: bool,
    clicked: Signal<()>,
}

impl CustomButton {
    pub const DEFAULT_CURSOR: &'static str = "hand2";
    /// Spinner edge length inside a button.
    pub const SPINNER_SIZE: u32 = 32;
    /// Spinner background when the button has no fill color.
    pub const SPINNER_FALLBACK_BG: &'static str = "#000000";

    /// Create a button.
    ///
    /// Missing text colors, state and cursor get their defaults. The spinner
    /// symbols are looked up in `store` by `options.spinner_name`; ticks are
    /// scheduled on `scheduler` and must be routed back through
    /// [`handle_timer`](Self::handle_timer).
    pub fn new(
        mut style: ResolvedStyle,
        options: ButtonOptions,
        store: &TemplateStore,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        style
            .text_color
            .get_or_insert_with(ButtonTemplates::default_text_color);
        style
            .text_color_disabled
            .get_or_insert_with(ButtonTemplates::default_text_color_disabled);
        style.state.get_or_insert(ButtonState::Normal);
        style
            .cursor
            .get_or_insert_with(|| Self::DEFAULT_CURSOR.to_string());

        let mut button = Self {
            style,
            spinner_symbols: store.spinner_symbols(&options.spinner_name),
            spinner: None,
            tooltip: options.tooltip.map(Tooltip::new),
            scheduler,
            hovered: false,
            destroyed: false,
            clicked: Signal::new(),
        };

        tracing::debug!(
            target: "dixt::button",
            text = %button.style.text,
            spinner = options.show_spinner,
            tooltip = button.tooltip.is_some(),
            "button created"
        );

        if options.show_spinner {
            button.show_spinner();
        }
        button
    }

    fn create_spinner(&self) -> Spinner {
        let bg = self
            .style
            .fill_color
            .clone()
            .unwrap_or_else(|| Color::new(Self::SPINNER_FALLBACK_BG));
        Spinner::new(self.spinner_symbols.clone(), self.scheduler.clone())
            .with_size(Self::SPINNER_SIZE)
            .with_bg_color(bg)
    }

    // =========================================================================
    // Spinner
    // =========================================================================

    /// Show and start the spinner, creating it on first use.
    ///
    /// Does nothing if it is already visible or the button was destroyed.
    pub fn show_spinner(&mut self) {
        if self.destroyed {
            tracing::debug!(target: "dixt::button", "show_spinner on a destroyed button");
            return;
        }
        if self.spinner.is_none() {
            self.spinner = Some(self.create_spinner());
        }
        if let Some(spinner) = &mut self.spinner {
            spinner.start();
        }
    }

    /// Stop and hide the spinner. Does nothing if it is not visible.
    pub fn hide_spinner(&mut self) {
        if let Some(spinner) = &mut self.spinner {
            spinner.stop();
        }
    }

    pub fn toggle_spinner(&mut self) {
        if self.is_spinner_visible() {
            self.hide_spinner();
        } else {
            self.show_spinner();
        }
    }

    pub fn is_spinner_visible(&self) -> bool {
        self.spinner.as_ref().is_some_and(Spinner::is_running)
    }

    pub fn spinner(&self) -> Option<&Spinner> {
        self.spinner.as_ref()
    }

    /// Route a fired timer to the spinner.
    ///
    /// Returns `true` if the timer belonged to it.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        self.spinner
            .as_mut()
            .is_some_and(|spinner| spinner.handle_timer(id))
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Deliver a click. Returns `true` if `clicked` was emitted.
    pub fn click(&self) -> bool {
        if self.destroyed || self.state() != ButtonState::Normal {
            return false;
        }
        tracing::trace!(target: "dixt::button", text = %self.style.text, "clicked");
        self.clicked.emit(());
        true
    }

    pub fn clicked(&self) -> &Signal<()> {
        &self.clicked
    }

    /// Pointer entered the button.
    pub fn on_enter(&mut self) {
        self.hovered = true;
        if let Some(tooltip) = &mut self.tooltip {
            tooltip.show();
        }
    }

    /// Pointer left the button.
    pub fn on_leave(&mut self) {
        self.hovered = false;
        if let Some(tooltip) = &mut self.tooltip {
            tooltip.hide();
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn state(&self) -> ButtonState {
        self.style.state.unwrap_or_default()
    }

    pub fn set_state(&mut self, state: ButtonState) {
        self.style.state = Some(state);
    }

    pub fn is_enabled(&self) -> bool {
        self.state() == ButtonState::Normal
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Tear the button down: stop the spinner and dismiss the tooltip.
    ///
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Some(spinner) = &mut self.spinner {
            spinner.stop();
        }
        if let Some(tooltip) = &mut self.tooltip {
            tooltip.dismiss();
        }
        tracing::debug!(target: "dixt::button", text = %self.style.text, "button destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // =========================================================================
    // Style Accessors
    // =========================================================================

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    pub fn text(&self) -> &str {
        &self.style.text
    }

    pub fn font(&self) -> Option<&Font> {
        self.style.font.as_ref()
    }

    pub fn fill_color(&self) -> Option<&Color> {
        self.style.fill_color.as_ref()
    }

    pub fn text_color(&self) -> Option<&Color> {
        self.style.text_color.as_ref()
    }

    pub fn cursor(&self) -> &str {
        self.style.cursor.as_deref().unwrap_or(Self::DEFAULT_CURSOR)
    }

    pub fn image(&self) -> Option<ImageHandle> {
        self.style.image
    }

    pub fn compound(&self) -> Option<ImageSide> {
        self.style.compound
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn spinner_symbols(&self) -> &SymbolSet {
        &self.spinner_symbols
    }
}

impl Drop for CustomButton {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for CustomButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomButton")
            .field("style", &self.style)
            .field("spinner", &self.spinner)
            .field("tooltip", &self.tooltip)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use dixt_core::SharedTimerManager;
    use dixt_style::templates::{TemplateSource, TemplateSources};

    fn store() -> TemplateStore {
        TemplateStore::from_sources(TemplateSources::new(
            TemplateSource::inline("buttons", "{}"),
            TemplateSource::inline("spinners", r#"{"classic": ["|", "/"], "dots": [".", ".."]}"#),
        ))
        .unwrap()
    }

    fn button(style: ResolvedStyle, options: ButtonOptions) -> (Arc<SharedTimerManager>, CustomButton) {
        let timers = Arc::new(SharedTimerManager::new());
        let button = CustomButton::new(style, options, &store(), timers.clone());
        (timers, button)
    }

    fn fire_all(timers: &SharedTimerManager, button: &mut CustomButton) -> usize {
        let later = Instant::now() + Duration::from_secs(60);
        timers
            .process_expired_at(later)
            .into_iter()
            .filter(|&id| button.handle_timer(id))
            .count()
    }

    #[test]
    fn defaults_are_applied() {
        let (_timers, button) = button(ResolvedStyle::default(), ButtonOptions::new());
        assert_eq!(button.text_color(), Some(&ButtonTemplates::default_text_color()));
        assert_eq!(
            button.style().text_color_disabled,
            Some(ButtonTemplates::default_text_color_disabled())
        );
        assert_eq!(button.state(), ButtonState::Normal);
        assert_eq!(button.cursor(), "hand2");
        assert!(button.spinner().is_none());
        assert!(button.tooltip().is_none());
    }

    #[test]
    fn style_values_win_over_defaults() {
        let style = ResolvedStyle {
            text_color: Some(Color::new("black")),
            cursor: Some("arrow".into()),
            state: Some(ButtonState::Disabled),
            ..Default::default()
        };
        let (_timers, button) = button(style, ButtonOptions::new());
        assert_eq!(button.text_color(), Some(&Color::new("black")));
        assert_eq!(button.cursor(), "arrow");
        assert!(!button.is_enabled());
    }

    #[test]
    fn spinner_starts_at_construction() {
        let style = ResolvedStyle {
            fill_color: Some(Color::pair("#3B8ED0", "#1F6AA5")),
            ..Default::default()
        };
        let (timers, button) = button(style, ButtonOptions::new().with_spinner(true));

        let spinner = button.spinner().unwrap();
        assert!(spinner.is_running());
        assert_eq!(spinner.size(), CustomButton::SPINNER_SIZE);
        assert_eq!(spinner.label().fg_color, Some(Color::pair("#3B8ED0", "#1F6AA5")));
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn spinner_background_falls_back_to_black() {
        let (_timers, mut button) = button(ResolvedStyle::default(), ButtonOptions::new());
        button.show_spinner();
        assert_eq!(
            button.spinner().unwrap().label().fg_color,
            Some(Color::new("#000000"))
        );
    }

    #[test]
    fn spinner_name_selects_symbols() {
        let (_timers, button) = button(
            ResolvedStyle::default(),
            ButtonOptions::new().with_spinner_name("dots"),
        );
        assert_eq!(button.spinner_symbols().first(), ".");

        let (_timers, button) = self::button(
            ResolvedStyle::default(),
            ButtonOptions::new().with_spinner_name("nope"),
        );
        assert_eq!(button.spinner_symbols().first(), "|");
    }

    #[test]
    fn visibility_follows_running_state() {
        let (timers, mut button) = button(ResolvedStyle::default(), ButtonOptions::new());
        assert!(!button.is_spinner_visible());

        button.show_spinner();
        button.show_spinner();
        assert!(button.is_spinner_visible());
        assert_eq!(timers.active_count(), 1);

        button.hide_spinner();
        button.hide_spinner();
        assert!(!button.is_spinner_visible());
        assert!(!button.spinner().unwrap().is_running());
        assert_eq!(timers.active_count(), 0);

        button.toggle_spinner();
        assert!(button.is_spinner_visible());
        button.toggle_spinner();
        assert!(!button.is_spinner_visible());
    }

    #[test]
    fn show_after_hide_resumes_animation() {
        let (timers, mut button) = button(ResolvedStyle::default(), ButtonOptions::new());
        button.show_spinner();
        button.hide_spinner();
        button.show_spinner();

        assert_eq!(fire_all(&timers, &mut button), 1);
        assert_eq!(button.spinner().unwrap().current_glyph(), "|");
    }

    #[test]
    fn destroy_stops_spinner_and_dismisses_tooltip() {
        let (timers, mut button) = button(
            ResolvedStyle::default(),
            ButtonOptions::new().with_spinner(true).with_tooltip("Busy"),
        );
        button.on_enter();
        let pending = button.spinner().unwrap().pending_tick().unwrap();

        button.destroy();
        assert!(button.is_destroyed());
        assert_eq!(timers.active_count(), 0);
        assert!(!button.handle_timer(pending));
        assert!(button.tooltip().unwrap().is_dismissed());

        button.show_spinner();
        assert!(!button.is_spinner_visible());
    }

    #[test]
    fn drop_cleans_up() {
        let (timers, button) = button(ResolvedStyle::default(), ButtonOptions::new().with_spinner(true));
        assert_eq!(timers.active_count(), 1);
        drop(button);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn tooltip_follows_hover() {
        let (_timers, mut button) =
            button(ResolvedStyle::default(), ButtonOptions::new().with_tooltip("Save"));
        assert_eq!(button.tooltip().unwrap().text(), "Save");

        button.on_enter();
        assert!(button.is_hovered());
        assert!(button.tooltip().unwrap().is_visible());

        button.on_leave();
        assert!(!button.tooltip().unwrap().is_visible());
    }

    #[test]
    fn click_respects_state() {
        let (_timers, mut button) = button(ResolvedStyle::default(), ButtonOptions::new());
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        button.clicked().connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(button.click());
        button.set_state(ButtonState::Disabled);
        assert!(!button.click());
        button.set_state(ButtonState::Normal);
        button.destroy();
        assert!(!button.click());

        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
