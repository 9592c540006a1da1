//! # Theme Registry
//!
//! Named themes an application can pick from at start-up or switch between
//! at runtime. Names keep their registration order, which makes
//! [ThemeRegistry::names] stable for settings pages.
//!
//! ## Built-in Themes
//!
//! [ThemeRegistry::with_builtins] registers:
//!
//! - `ange` - [DEF_THEME], the styled default look
//! - `plain` - [Theme::default], every widget at its record defaults
//!
//! ```rust
//! use ange_theme::registry::ThemeRegistry;
//! use ange_theme::theme::DEF_THEME;
//!
//! let registry = ThemeRegistry::with_builtins();
//! assert_eq!(registry.resolve("ange").unwrap(), DEF_THEME);
//! assert!(registry.resolve("missing").is_err());
//! ```

use indexmap::IndexMap;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{Theme, DEF_THEME};

/// Name of the built-in styled theme.
pub const ANGE: &str = "ange";
/// Name of the built-in theme made of record defaults.
pub const PLAIN: &str = "plain";

/// A name to [Theme] map.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Theme>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in themes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ANGE, DEF_THEME);
        registry.register(PLAIN, Theme::default());
        registry
    }

    /// Register a theme under `name`, returning the theme it replaced.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) -> Option<Theme> {
        let name = name.into().to_lowercase();
        log::debug!("Registering theme '{}'", name);
        self.themes.insert(name, theme)
    }

    /// Remove a theme, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Theme> {
        self.themes.shift_remove(&name.to_lowercase())
    }

    /// Look up a theme. Names are case-insensitive.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(&name.to_lowercase())
    }

    /// Copy a theme out of the registry.
    pub fn resolve(&self, name: &str) -> ThemeResult<Theme> {
        self.get(name).copied().ok_or_else(|| ThemeError::not_found(name))
    }

    /// Whether a theme is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&name.to_lowercase())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether no theme is registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_builtins() {
        let registry = ThemeRegistry::with_builtins();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec![ANGE, PLAIN]);
        assert_eq!(registry.resolve("plain").unwrap(), Theme::default());
        assert_eq!(registry.resolve("ANGE").unwrap(), DEF_THEME);
    }

    #[test]
    fn test_register_replaces_and_keeps_order() {
        let mut registry = ThemeRegistry::with_builtins();
        let mut dark = DEF_THEME;
        dark.background.base.tint = Color::rgb8(30, 30, 30);

        assert!(registry.register("Dark", dark).is_none());
        assert_eq!(registry.register(ANGE, dark), Some(DEF_THEME));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec![ANGE, PLAIN, "dark"]);
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.unregister("dark"), Some(dark));
        assert!(!registry.contains("dark"));
    }

    #[test]
    fn test_missing_theme() {
        let registry = ThemeRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.resolve("ange"),
            Err(ThemeError::NotFound { name }) if name == "ange"
        ));
    }
}
