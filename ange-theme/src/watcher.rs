//! # Theme Hot Reload
//!
//! Watches a theme file and reloads it into a [SharedTheme] when it changes.
//! The parent directory is watched rather than the file itself, so editors
//! that save by writing a new file and renaming it over the old one are
//! picked up too.

use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{ThemeError, ThemeResult};
use crate::manager::{install, SharedFont, SharedTheme};
use crate::theme::Theme;

/// Keeps a theme file watched until dropped.
///
/// Created by [ThemeManager::watch_file](crate::manager::ThemeManager::watch_file).
pub struct ThemeWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
}

impl ThemeWatcher {
    pub(crate) fn new(path: &Path, theme: SharedTheme, font: SharedFont) -> ThemeResult<Self> {
        let path = path.to_path_buf();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let watched = path.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if is_change_of(&event, &watched) => {
                if let Err(err) = reload(&watched, &theme, &font) {
                    log::warn!("Keeping previous theme, reload of {:?} failed: {}", watched, err);
                }
            },
            Ok(_) => {},
            Err(err) => log::warn!("Theme watcher error: {}", err),
        })
        .map_err(ThemeError::file_watcher_error)?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(ThemeError::file_watcher_error)?;

        log::debug!("Watching theme file {:?}", path);
        Ok(Self {
            path,
            _watcher: watcher,
        })
    }

    /// The watched theme file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_change_of(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|changed| changed.file_name() == path.file_name())
}

/// Load `path` and install it as the current theme, keeping the assigned font.
pub(crate) fn reload(path: &Path, theme: &SharedTheme, font: &SharedFont) -> ThemeResult<()> {
    let loaded = Theme::load(path)?;
    install(theme, font, loaded);
    log::info!("Reloaded theme from {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, RwLock};

    use crate::font::FontId;
    use crate::theme::DEF_THEME;

    #[test]
    fn test_reload_keeps_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "[v_scroller]\nwidth = 30\n").unwrap();

        let theme = Arc::new(RwLock::new(DEF_THEME));
        let font = Arc::new(RwLock::new(Some(FontId::new(2))));
        reload(&path, &theme, &font).unwrap();

        let current = *theme.read().unwrap();
        assert_eq!(current.v_scroller.width, 30);
        assert_eq!(current.header2.used_font, Some(FontId::new(2)));
    }

    #[test]
    fn test_failed_reload_keeps_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "[v_scroller]\nwidth = \"wide\"\n").unwrap();

        let theme = Arc::new(RwLock::new(DEF_THEME));
        let font = Arc::new(RwLock::new(None));
        assert!(matches!(
            reload(&path, &theme, &font),
            Err(ThemeError::Parse { .. })
        ));
        assert_eq!(*theme.read().unwrap(), DEF_THEME);
    }

    #[test]
    fn test_change_filter() {
        let path = Path::new("/themes/night.toml");
        let modified = Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(PathBuf::from("/themes/night.toml"));
        let other = Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(PathBuf::from("/themes/day.toml"));
        let removed = Event::new(EventKind::Remove(notify::event::RemoveKind::File))
            .add_path(PathBuf::from("/themes/night.toml"));

        assert!(is_change_of(&modified, path));
        assert!(!is_change_of(&other, path));
        assert!(!is_change_of(&removed, path));
    }

    #[test]
    fn test_watch_missing_directory_fails() {
        let theme = Arc::new(RwLock::new(DEF_THEME));
        let font = Arc::new(RwLock::new(None));
        let result = ThemeWatcher::new(
            Path::new("/nonexistent-ange-dir/theme.toml"),
            theme,
            font,
        );
        assert!(matches!(result, Err(ThemeError::FileWatcher { .. })));
    }
}
