//! Where template documents come from.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::TemplateLoadError;

/// Built-in button templates.
pub(crate) const BUILTIN_BUTTONS: &str = include_str!("../../themes/default.json");
/// Built-in spinner symbol sets.
pub(crate) const BUILTIN_SPINNERS: &str = include_str!("../../themes/spinner.json");

/// A single template document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A document on disk. Re-read on every load.
    File(PathBuf),
    /// A document held in memory under a display name.
    Inline { name: String, contents: String },
}

impl TemplateSource {
    /// Create a file source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Create an in-memory source.
    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::Inline {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Name used in errors and logs.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::File(path) => path.to_string_lossy(),
            Self::Inline { name, .. } => Cow::Borrowed(name),
        }
    }

    /// Path of a file source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Inline { .. } => None,
        }
    }

    /// Read the document text.
    pub(crate) fn read(&self) -> Result<Cow<'_, str>, TemplateLoadError> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|e| TemplateLoadError::io(self.name(), path, e)),
            Self::Inline { contents, .. } => Ok(Cow::Borrowed(contents)),
        }
    }
}

/// The pair of documents a [`TemplateStore`](super::TemplateStore) is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSources {
    /// Button document with `SIZES`, `FORMATS` and `PRESETS`.
    pub buttons: TemplateSource,
    /// Spinner document mapping set names to symbol lists.
    pub spinners: TemplateSource,
}

impl TemplateSources {
    pub fn new(buttons: TemplateSource, spinners: TemplateSource) -> Self {
        Self { buttons, spinners }
    }

    /// The templates embedded in this crate.
    pub fn builtin() -> Self {
        Self {
            buttons: TemplateSource::inline("builtin:default.json", BUILTIN_BUTTONS),
            spinners: TemplateSource::inline("builtin:spinner.json", BUILTIN_SPINNERS),
        }
    }

    /// Paths of all file-backed sources.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        [&self.buttons, &self.spinners]
            .into_iter()
            .filter_map(TemplateSource::path)
    }
}
