//! Error types for the styling system.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A template source could not be loaded.
///
/// Every variant names the failing source. A failed load never touches the
/// registries that were loaded before it.
#[derive(Debug, thiserror::Error)]
pub enum TemplateLoadError {
    /// The source could not be read.
    #[error("Failed to read template source '{name}': {source}")]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a valid template document.
    #[error("Malformed template source '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but holds an unusable value.
    #[error("Invalid template source '{name}': {message}")]
    Invalid { name: String, message: String },
}

impl TemplateLoadError {
    /// Create an I/O error.
    pub fn io(name: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            name: name.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Name of the source that failed.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Io { name, .. } | Self::Parse { name, .. } | Self::Invalid { name, .. } => name,
        }
    }
}

/// Errors that can occur in the styling system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template loading failed.
    #[error(transparent)]
    TemplateLoad(#[from] TemplateLoadError),

    /// File I/O error outside of template parsing.
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("Hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
