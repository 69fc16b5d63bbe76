//! Busy spinner widget.
//!
//! A [`Spinner`] cycles through a [`SymbolSet`], showing one glyph per tick.
//! Ticks are single-shot timers: each tick that updates the glyph schedules
//! the next one, and stopping cancels the pending timer.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//!
//! use dixt::prelude::*;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let mut spinner = Spinner::new(SymbolSet::classic(), timers.clone());
//! spinner.start();
//!
//! // In your event loop:
//! let later = Instant::now() + Duration::from_secs(1);
//! for id in timers.process_expired_at(later) {
//!     spinner.handle_timer(id);
//! }
//! assert_eq!(spinner.current_glyph(), "|");
//! ```

use std::sync::Arc;
use std::time::Duration;

use dixt_core::{Scheduler, Signal, TimerId};
use dixt_style::templates::SymbolSet;
use dixt_style::types::{Color, Font, FontSpec, FontWeight};

/// Animation state of a spinner.
///
/// The pending tick handle only exists while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    Stopped,
    Running { pending: TimerId },
}

/// What the spinner's label displays.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerLabel {
    /// Current glyph.
    pub text: String,
    pub font: Font,
    pub text_color: Color,
    /// Label background, or `None` for the parent's.
    pub fg_color: Option<Color>,
}

/// A cyclic busy indicator.
///
/// # Signals
///
/// - `glyph_changed`: Emitted with the new glyph on every effective tick
pub struct Spinner {
    symbols: SymbolSet,
    index: usize,
    speed: Duration,
    size: u32,
    state: SpinnerState,
    label: SpinnerLabel,
    scheduler: Arc<dyn Scheduler>,
    glyph_changed: Signal<String>,
}

impl Spinner {
    /// Interval between ticks.
    pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);
    /// Edge length in pixels.
    pub const DEFAULT_SIZE: u32 = 20;
    pub const DEFAULT_FG_COLOR: &'static str = "#FFFFFF";
    /// Smallest glyph font size.
    pub const MIN_FONT_SIZE: u32 = 8;

    /// Create a stopped spinner showing the first symbol.
    pub fn new(symbols: SymbolSet, scheduler: Arc<dyn Scheduler>) -> Self {
        let label = SpinnerLabel {
            text: symbols.first().to_string(),
            font: Self::glyph_font(Self::DEFAULT_SIZE),
            text_color: Color::new(Self::DEFAULT_FG_COLOR),
            fg_color: None,
        };

        Self {
            symbols,
            index: 0,
            speed: Self::DEFAULT_SPEED,
            size: Self::DEFAULT_SIZE,
            state: SpinnerState::Stopped,
            label,
            scheduler,
            glyph_changed: Signal::new(),
        }
    }

    fn glyph_font(size: u32) -> Font {
        let font_size = size.saturating_sub(4).max(Self::MIN_FONT_SIZE);
        Font::new(FontSpec::new(font_size, FontWeight::Bold))
    }

    /// Set the tick interval using builder pattern.
    ///
    /// A running spinner picks the new interval up on its next tick.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Set the edge length using builder pattern. The glyph font follows it.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self.label.font = Self::glyph_font(size);
        self
    }

    /// Set the glyph color using builder pattern.
    pub fn with_fg_color(mut self, color: Color) -> Self {
        self.label.text_color = color;
        self
    }

    /// Set the label background using builder pattern.
    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.label.fg_color = Some(color);
        self
    }

    // =========================================================================
    // State Machine
    // =========================================================================

    /// Start animating. Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let pending = self.scheduler.schedule_once(self.speed);
        self.state = SpinnerState::Running { pending };
        tracing::debug!(target: "dixt::spinner", ?pending, "spinner started");
    }

    /// Stop animating and cancel the pending tick. Does nothing if stopped.
    pub fn stop(&mut self) {
        let SpinnerState::Running { pending } = self.state else {
            return;
        };
        self.state = SpinnerState::Stopped;
        self.scheduler.cancel(pending);
        tracing::debug!(target: "dixt::spinner", ?pending, "spinner stopped");
    }

    /// Stop if running, otherwise start.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Deliver a fired timer.
    ///
    /// Returns `true` if `id` was this spinner's pending tick. Any other id,
    /// including a tick that fired after [`stop`](Self::stop), is ignored.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        match self.state {
            SpinnerState::Running { pending } if pending == id => {
                self.tick();
                true
            }
            _ => false,
        }
    }

    #[tracing::instrument(target = "dixt::spinner", level = "trace", skip(self), fields(index = self.index))]
    fn tick(&mut self) {
        let glyph = self.symbols.get(self.index).to_string();
        self.label.text.clone_from(&glyph);
        self.index = (self.index + 1) % self.symbols.len();

        let pending = self.scheduler.schedule_once(self.speed);
        self.state = SpinnerState::Running { pending };

        self.glyph_changed.emit(glyph);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> SpinnerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SpinnerState::Running { .. })
    }

    /// Index of the symbol the next tick shows.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Glyph currently displayed.
    pub fn current_glyph(&self) -> &str {
        &self.label.text
    }

    /// Handle of the scheduled tick, if running.
    pub fn pending_tick(&self) -> Option<TimerId> {
        match self.state {
            SpinnerState::Running { pending } => Some(pending),
            SpinnerState::Stopped => None,
        }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn label(&self) -> &SpinnerLabel {
        &self.label
    }

    pub fn glyph_changed(&self) -> &Signal<String> {
        &self.glyph_changed
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("symbols", &self.symbols)
            .field("index", &self.index)
            .field("speed", &self.speed)
            .field("state", &self.state)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
