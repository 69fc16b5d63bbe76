//! Style templates and layered style composition for dixt buttons.
//!
//! This crate holds everything a button needs before it exists:
//!
//! - **Templates**: named size, shape and preset layers plus spinner symbol
//!   sets, loaded from JSON documents or the embedded defaults
//! - **Composition**: a deterministic right-biased merge of those layers with
//!   per-call overrides into one [`ResolvedStyle`](style::ResolvedStyle)
//! - **Hot Reload**: reload templates when their files change
//!
//! # Example
//!
//! ```
//! use dixt_style::prelude::*;
//!
//! let store = TemplateStore::builtin()?;
//! let request = StyleRequest::new("Delete")
//!     .with_size("large")
//!     .with_preset("danger");
//!
//! let style = compose(&store, &request);
//! assert_eq!(style.text, "Delete");
//! assert!(style.fill_color.is_some());
//! # Ok::<(), dixt_style::TemplateLoadError>(())
//! ```

pub mod resolve;
pub mod style;
pub mod templates;
pub mod types;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use error::{Error, Result, TemplateLoadError};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::{CustomSize, StyleOverrides, StyleRequest, compose};
    pub use crate::style::{ResolvedStyle, StyleProperties};
    pub use crate::templates::{
        SymbolSet, TemplatePaths, TemplateSource, TemplateSources, TemplateStore,
    };
    pub use crate::types::{
        ButtonState, Color, Font, FontSpec, FontValue, FontWeight, ImageHandle, ImageSide,
    };

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::TemplateWatcher;
}
