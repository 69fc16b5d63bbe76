//! Button widgets.
//!
//! - [`Spinner`]: cyclic busy indicator driven by single-shot timer ticks
//! - [`CustomButton`]: styled button owning an optional spinner and tooltip
//! - [`ButtonFactory`]: composes a style from templates and builds a button

mod custom_button;
mod factory;
mod spinner;
mod tooltip;

pub use custom_button::{ButtonOptions, CustomButton};
pub use factory::ButtonFactory;
pub use spinner::{Spinner, SpinnerLabel, SpinnerState};
pub use tooltip::Tooltip;
