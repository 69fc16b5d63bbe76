//! Hot-reload support for template documents.
//!
//! This module is only available with the `hot-reload` feature.

mod watcher;

pub use watcher::{ChangeKind, TemplateChangeEvent, TemplateWatcher};
