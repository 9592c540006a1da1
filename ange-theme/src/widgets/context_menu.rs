use serde::{Deserialize, Serialize};

use super::button::SimpleButtonTheme;
use super::rect::{BackgroundTheme, ImageTheme};

/// Theme of the context menu widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMenuTheme {
    /// Menu panel.
    pub base: BackgroundTheme,
    /// Menu entries, drawn as buttons.
    pub item: SimpleButtonTheme,
    /// Icons shown next to entries.
    pub image: ImageTheme,
    /// Height of one entry.
    pub row_height: i32,
}

impl ContextMenuTheme {
    /// Default panel, entries and icons with 20px rows.
    pub const DEFAULT: Self = Self::new(
        BackgroundTheme::DEFAULT,
        SimpleButtonTheme::DEFAULT,
        ImageTheme::DEFAULT,
        20,
    );

    /// Create a context menu theme.
    pub const fn new(
        base: BackgroundTheme,
        item: SimpleButtonTheme,
        image: ImageTheme,
        row_height: i32,
    ) -> Self {
        Self {
            base,
            item,
            image,
            row_height,
        }
    }
}

impl Default for ContextMenuTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
