//! # Theme Error Types
//!
//! Errors raised while loading, resolving or watching themes. Building theme
//! records and assigning fonts never fail; only the file, registry and watcher
//! layers report errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name is not registered.
    #[error("Theme '{name}' not found")]
    NotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme file does not exist.
    #[error("Theme file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme or configuration file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    Parse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported theme file format {path:?}, expected .toml or .json")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Error serializing or deserializing theme data held in memory.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error setting up the file watcher for hot reload.
    #[error("Failed to setup file watcher: {source}")]
    FileWatcher {
        /// The underlying error.
        #[source]
        source: notify::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a file watcher error.
    pub fn file_watcher_error(source: notify::Error) -> Self {
        Self::FileWatcher { source }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ThemeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
