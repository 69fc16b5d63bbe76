//! Locating template documents on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::source::{TemplateSource, TemplateSources};
use super::store::TemplateStore;
use crate::error::TemplateLoadError;

/// Environment variable naming a directory of template documents.
pub const THEME_DIR_ENV: &str = "DIXT_THEME_DIR";
/// File name of the button document inside a theme directory.
pub const BUTTONS_FILE: &str = "default.json";
/// File name of the spinner document inside a theme directory.
pub const SPINNERS_FILE: &str = "spinner.json";

/// Locations of the button and spinner documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePaths {
    pub buttons: PathBuf,
    pub spinners: PathBuf,
}

impl TemplatePaths {
    /// The standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            buttons: dir.join(BUTTONS_FILE),
            spinners: dir.join(SPINNERS_FILE),
        }
    }

    /// Check that both documents exist.
    pub fn exists(&self) -> bool {
        self.buttons.is_file() && self.spinners.is_file()
    }

    /// Directories searched for templates, in priority order.
    ///
    /// `theme_dir_env` is the value of [`THEME_DIR_ENV`], if set. The user
    /// config directory (`<config>/dixt/themes`) comes after it.
    pub fn search_dirs_with(theme_dir_env: Option<OsString>) -> Vec<PathBuf> {
        let mut search = Vec::new();

        if let Some(dir) = theme_dir_env.filter(|d| !d.is_empty()) {
            search.push(PathBuf::from(dir));
        }

        if let Some(config) = dirs::config_dir() {
            search.push(config.join("dixt").join("themes"));
        }

        search
    }

    /// Directories searched for templates, reading [`THEME_DIR_ENV`].
    pub fn search_dirs() -> Vec<PathBuf> {
        Self::search_dirs_with(std::env::var_os(THEME_DIR_ENV))
    }

    /// First searched directory holding both documents.
    pub fn find_in(dirs: &[PathBuf]) -> Option<Self> {
        dirs.iter().map(Self::in_dir).find(|paths| {
            let found = paths.exists();
            tracing::trace!(
                target: "dixt_style::templates",
                buttons = %paths.buttons.display(),
                found,
                "probing template directory"
            );
            found
        })
    }

    /// Locate templates using the default search directories.
    pub fn discover() -> Option<Self> {
        Self::find_in(&Self::search_dirs())
    }

    pub fn into_sources(self) -> TemplateSources {
        TemplateSources::new(
            TemplateSource::File(self.buttons),
            TemplateSource::File(self.spinners),
        )
    }
}

impl TemplateStore {
    /// Load templates from the first directory holding both documents,
    /// falling back to the embedded templates.
    ///
    /// A directory that is found but holds broken documents is an error; it
    /// does not silently fall back.
    pub fn discover() -> Result<Self, TemplateLoadError> {
        Self::discover_in(&TemplatePaths::search_dirs())
    }

    /// Like [`discover`](Self::discover), searching only `dirs`.
    pub fn discover_in(dirs: &[PathBuf]) -> Result<Self, TemplateLoadError> {
        match TemplatePaths::find_in(dirs) {
            Some(paths) => Self::from_sources(paths.into_sources()),
            None => {
                tracing::debug!(target: "dixt_style::templates", "no template directory found, using built-in templates");
                Self::builtin()
            }
        }
    }
}
