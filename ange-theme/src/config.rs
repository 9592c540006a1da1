//! # Theme Configuration
//!
//! Chooses which theme an application starts with. A configuration names a
//! default theme source and an optional fallback that is used when the
//! default cannot be resolved.
//!
//! ## Environment Variables
//!
//! - `ANGE_THEME`: default theme, a registered name (`ange`, `plain`, ...)
//!   or `file:<path>` for a theme file
//! - `ANGE_THEME_FALLBACK`: fallback theme, same syntax
//! - `ANGE_THEME_CONFIG`: path to a TOML configuration file
//!
//! The configuration file is read first; `ANGE_THEME` and
//! `ANGE_THEME_FALLBACK` override what it says.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "file:themes/night.toml"
//! fallback = "ange"
//! ```
//!
//! Relative `file:` paths are taken relative to the configuration file.
//!
//! ## Usage
//!
//! ```rust
//! use ange_theme::config::{ThemeConfig, ThemeSource};
//! use ange_theme::registry::ThemeRegistry;
//!
//! let config = ThemeConfig::new()
//!     .with_default_theme(ThemeSource::File("missing.toml".into()))
//!     .with_fallback_theme(ThemeSource::builtin("plain"));
//!
//! let theme = config.resolve_theme(&ThemeRegistry::with_builtins()).unwrap();
//! assert_eq!(theme, Default::default());
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::registry::{self, ThemeRegistry};
use crate::theme::Theme;

/// Environment variable naming the default theme.
pub const THEME_ENV: &str = "ANGE_THEME";
/// Environment variable naming the fallback theme.
pub const THEME_FALLBACK_ENV: &str = "ANGE_THEME_FALLBACK";
/// Environment variable holding the configuration file path.
pub const THEME_CONFIG_ENV: &str = "ANGE_THEME_CONFIG";

const FILE_PREFIX: &str = "file:";

/// Where a theme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// A theme registered under this name.
    Builtin(String),
    /// A TOML or JSON theme file.
    File(PathBuf),
}

impl ThemeSource {
    /// Refer to a registered theme.
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin(name.into())
    }

    /// Parse `name` or `file:<path>`.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        match source.strip_prefix(FILE_PREFIX) {
            Some(path) => Self::File(PathBuf::from(path.trim())),
            None => Self::Builtin(source.to_lowercase()),
        }
    }

    /// Load the theme this source points at.
    pub fn resolve(&self, registry: &ThemeRegistry) -> ThemeResult<Theme> {
        match self {
            Self::Builtin(name) => registry.resolve(name),
            Self::File(path) => Theme::load(path),
        }
    }

    fn relative_to(self, base: &Path) -> Self {
        match self {
            Self::File(path) if path.is_relative() => Self::File(base.join(path)),
            other => other,
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(name) => f.write_str(name),
            Self::File(path) => write!(f, "{}{}", FILE_PREFIX, path.display()),
        }
    }
}

/// Which theme to start with, and what to use if it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// The theme to use.
    pub default_theme: ThemeSource,
    /// Used when the default theme cannot be resolved.
    pub fallback_theme: Option<ThemeSource>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ConfigTable,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigTable {
    default: Option<String>,
    fallback: Option<String>,
}

impl ThemeConfig {
    /// Start with the built-in Ange theme and no fallback.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeSource::builtin(registry::ANGE),
            fallback_theme: None,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Problems with the configuration file are logged and otherwise ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read the configuration through `var`, which maps a variable name to
    /// its value.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = var(THEME_CONFIG_ENV) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring theme configuration {}: {}", path, err),
            }
        }

        if let Some(theme) = var(THEME_ENV) {
            config.default_theme = ThemeSource::parse(&theme);
        }

        if let Some(fallback) = var(THEME_FALLBACK_ENV) {
            config.fallback_theme = Some(ThemeSource::parse(&fallback));
        }

        config
    }

    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|err| ThemeError::parse_error(path, err.to_string()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            default_theme: config.default_theme.relative_to(base),
            fallback_theme: config.fallback_theme.map(|source| source.relative_to(base)),
        })
    }

    /// Parse the configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::new();

        if let Some(default) = file.theme.default {
            config.default_theme = ThemeSource::parse(&default);
        }
        config.fallback_theme = file.theme.fallback.as_deref().map(ThemeSource::parse);

        Ok(config)
    }

    /// Set the default theme source.
    pub fn with_default_theme(mut self, theme: ThemeSource) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback theme source.
    pub fn with_fallback_theme(mut self, theme: ThemeSource) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Resolve the default theme, trying the fallback if that fails.
    ///
    /// When both fail the error of the fallback is returned.
    pub fn resolve_theme(&self, registry: &ThemeRegistry) -> ThemeResult<Theme> {
        self.resolve_source(registry).map(|(_, theme)| theme)
    }

    /// Like [Self::resolve_theme], also returning the source that was used.
    pub fn resolve_source(&self, registry: &ThemeRegistry) -> ThemeResult<(&ThemeSource, Theme)> {
        match self.default_theme.resolve(registry) {
            Ok(theme) => Ok((&self.default_theme, theme)),
            Err(err) => match &self.fallback_theme {
                Some(fallback) => {
                    log::warn!(
                        "Theme '{}' unavailable ({}), falling back to '{}'",
                        self.default_theme,
                        err,
                        fallback
                    );
                    fallback.resolve(registry).map(|theme| (fallback, theme))
                },
                None => Err(err),
            },
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
