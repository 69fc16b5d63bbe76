//! Template documents and the store they are loaded into.

mod paths;
mod source;
mod store;
mod symbols;

pub use paths::{TemplatePaths, BUTTONS_FILE, SPINNERS_FILE, THEME_DIR_ENV};
pub use source::{TemplateSource, TemplateSources};
pub use store::{ButtonTemplates, SpinnerTemplates, TemplateStore};
pub use symbols::SymbolSet;
