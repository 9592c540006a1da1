//! # Theme Manager
//!
//! Holds the theme an application is currently drawing with. Widgets read it
//! through a [SharedTheme] handle while the application switches themes,
//! assigns fonts or hot-reloads a theme file; the lock serializes those
//! writes against concurrent readers.
//!
//! The assigned font outlives theme switches: whichever theme becomes current
//! gets the font the application assigned last.
//!
//! ```rust
//! use ange_theme::font::FontId;
//! use ange_theme::manager::ThemeManager;
//!
//! let mut manager = ThemeManager::new();
//! manager.assign_font(Some(FontId::new(1)));
//! manager.switch_theme("plain").unwrap();
//!
//! assert_eq!(manager.current_name(), "plain");
//! assert_eq!(manager.snapshot().header1.used_font, Some(FontId::new(1)));
//! ```

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{ThemeConfig, ThemeSource};
use crate::error::ThemeResult;
use crate::font::FontId;
use crate::registry::{self, ThemeRegistry};
use crate::theme::{Theme, DEF_THEME};
use crate::watcher::ThemeWatcher;

/// A theme shared between the application and its widgets.
pub type SharedTheme = Arc<RwLock<Theme>>;

/// The font last assigned through a [ThemeManager].
pub type SharedFont = Arc<RwLock<Option<FontId>>>;

/// Owns the registry and the current theme.
pub struct ThemeManager {
    registry: ThemeRegistry,
    current: SharedTheme,
    font: SharedFont,
    current_name: String,
}

impl ThemeManager {
    /// Create a manager with the built-in themes, starting on [DEF_THEME].
    pub fn new() -> Self {
        Self {
            registry: ThemeRegistry::with_builtins(),
            current: Arc::new(RwLock::new(DEF_THEME)),
            font: Arc::new(RwLock::new(None)),
            current_name: registry::ANGE.to_string(),
        }
    }

    /// Create a manager over `registry`, starting on the theme named `name`.
    pub fn with_registry(registry: ThemeRegistry, name: &str) -> ThemeResult<Self> {
        let theme = registry.resolve(name)?;
        Ok(Self {
            registry,
            current: Arc::new(RwLock::new(theme)),
            font: Arc::new(RwLock::new(None)),
            current_name: name.to_lowercase(),
        })
    }

    /// Create a manager over `registry`, starting on what `config` resolves to.
    pub fn from_config(config: &ThemeConfig, registry: ThemeRegistry) -> ThemeResult<Self> {
        let (source, theme) = config.resolve_source(&registry)?;
        let current_name = source.to_string();
        Ok(Self {
            registry,
            current: Arc::new(RwLock::new(theme)),
            font: Arc::new(RwLock::new(None)),
            current_name,
        })
    }

    /// The registered themes.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The registered themes, for adding or removing some.
    pub fn registry_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.registry
    }

    /// Name or source of the current theme.
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// Make the registered theme `name` current.
    ///
    /// On error the current theme is left as it was.
    pub fn switch_theme(&mut self, name: &str) -> ThemeResult<()> {
        let theme = self.registry.resolve(name)?;
        self.install(theme);
        self.current_name = name.to_lowercase();
        log::info!("Switched to theme '{}'", self.current_name);
        Ok(())
    }

    /// Load a theme file and make it current.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> ThemeResult<()> {
        let path = path.as_ref();
        let theme = Theme::load(path)?;
        self.install(theme);
        self.current_name = ThemeSource::File(path.to_path_buf()).to_string();
        log::info!("Switched to theme '{}'", self.current_name);
        Ok(())
    }

    /// Point every font-bearing text theme of the current theme at `font`,
    /// and remember it for themes installed later.
    pub fn assign_font(&self, font: Option<FontId>) {
        let mut assigned = write(&self.font);
        *assigned = font;
        write(&self.current).assign_font_to_all(font);
    }

    /// The font last passed to [Self::assign_font].
    pub fn font(&self) -> Option<FontId> {
        *read(&self.font)
    }

    /// A copy of the current theme.
    pub fn snapshot(&self) -> Theme {
        *read(&self.current)
    }

    /// A handle widgets can keep to read the current theme.
    pub fn shared(&self) -> SharedTheme {
        Arc::clone(&self.current)
    }

    /// Reload the theme file at `path` into the current theme whenever it
    /// changes on disk, until the returned watcher is dropped.
    pub fn watch_file<P: AsRef<Path>>(&self, path: P) -> ThemeResult<ThemeWatcher> {
        ThemeWatcher::new(
            path.as_ref(),
            Arc::clone(&self.current),
            Arc::clone(&self.font),
        )
    }

    fn install(&self, theme: Theme) {
        install(&self.current, &self.font, theme);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the theme behind `current`, carrying over the assigned font.
///
/// The font lock is held across the write and always taken before the theme
/// lock, as in [ThemeManager::assign_font].
pub(crate) fn install(current: &SharedTheme, font: &SharedFont, theme: Theme) {
    let font = read(font);
    *write(current) = theme.with_font(*font);
}

// A panicking writer cannot leave a `Theme` half-valid, so poisoning is ignored.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::watcher::reload;

    #[test]
    fn test_starts_on_default_theme() {
        let manager = ThemeManager::new();
        assert_eq!(manager.current_name(), "ange");
        assert_eq!(manager.snapshot(), DEF_THEME);
        assert_eq!(manager.font(), None);
    }

    #[test]
    fn test_font_survives_switch() {
        let mut manager = ThemeManager::new();
        let shared = manager.shared();
        let font = Some(FontId::new(7));

        manager.assign_font(font);
        assert_eq!(read(&shared).content_text.used_font, font);

        manager.switch_theme("PLAIN").unwrap();
        let current = *read(&shared);
        assert_eq!(current, Theme::default().with_font(font));
        assert_eq!(manager.current_name(), "plain");
    }

    #[test]
    fn test_failed_switch_keeps_theme() {
        let mut manager = ThemeManager::new();
        let err = manager.switch_theme("nope").unwrap_err();
        assert!(matches!(err, ThemeError::NotFound { .. }));
        assert_eq!(manager.current_name(), "ange");
        assert_eq!(manager.snapshot(), DEF_THEME);
    }

    #[test]
    fn test_from_config_names_the_used_source() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::builtin("missing"))
            .with_fallback_theme(ThemeSource::builtin("plain"));
        let manager = ThemeManager::from_config(&config, ThemeRegistry::with_builtins()).unwrap();
        assert_eq!(manager.current_name(), "plain");
        assert_eq!(manager.snapshot(), Theme::default());
    }

    #[test]
    fn test_font_assignment_during_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "[v_scroller]\nwidth = 30\n").unwrap();
        let manager = ThemeManager::new();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..200 {
                    reload(&path, &manager.current, &manager.font).unwrap();
                }
            });
            for raw in 0..200 {
                manager.assign_font(Some(FontId::new(raw)));
            }
        });

        let font = manager.font();
        assert_eq!(font, Some(FontId::new(199)));
        let current = manager.snapshot();
        assert_eq!(current.v_scroller.width, 30);
        assert!(current.text_themes().iter().all(|text| text.used_font == font));
    }
}
