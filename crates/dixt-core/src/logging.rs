//! Logging facilities for dixt.
//!
//! dixt uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every subsystem logs under its own target, listed in [`targets`], so it can
//! be filtered with the usual `RUST_LOG` directives, for example
//! `RUST_LOG=dixt::spinner=trace,dixt_style=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "dixt_core";
    /// Timer system target.
    pub const TIMER: &str = "dixt_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "dixt_core::signal";
    /// Template loading and reloading.
    pub const TEMPLATES: &str = "dixt_style::templates";
    /// Style composition.
    pub const COMPOSE: &str = "dixt_style::compose";
    /// Template file watching.
    pub const HOT_RELOAD: &str = "dixt_style::hot_reload";
    /// Spinner animation.
    pub const SPINNER: &str = "dixt::spinner";
    /// Button lifecycle.
    pub const BUTTON: &str = "dixt::button";
}

/// Returns `true` if `target` belongs to a dixt subsystem.
pub fn is_dixt_target(target: &str) -> bool {
    target == targets::CORE
        || target.starts_with("dixt_core::")
        || target == "dixt_style"
        || target.starts_with("dixt_style::")
        || target == "dixt"
        || target.starts_with("dixt::")
}
