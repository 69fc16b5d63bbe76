//! dixt - styled buttons with tooltips and busy spinners.
//!
//! This is the umbrella crate. It re-exports the core scheduling and signal
//! types, exposes the style crate as [`style`], and provides the widgets.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dixt::prelude::*;
//!
//! let store = TemplateStore::discover()?;
//! let timers = Arc::new(SharedTimerManager::new());
//!
//! let mut button = ButtonFactory::new(&store).create(
//!     &StyleRequest::new("Save").with_preset("primary"),
//!     ButtonOptions::new().with_spinner(true),
//!     timers.clone(),
//! );
//!
//! // In your event loop:
//! for id in timers.process_expired() {
//!     button.handle_timer(id);
//! }
//! # Ok::<(), dixt::style::TemplateLoadError>(())
//! ```

pub use dixt_core::*;

/// Style templates and composition.
pub mod style {
    pub use dixt_style::*;
}

pub mod widget;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use dixt_core::{Scheduler, SharedTimerManager, Signal, TimerId};
    pub use dixt_style::prelude::*;

    pub use crate::widget::{
        ButtonFactory, ButtonOptions, CustomButton, Spinner, SpinnerState, Tooltip,
    };
}
