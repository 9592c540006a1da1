use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::font::FontId;

/// Theme of a run of text.
///
/// `used_font` is a borrowed handle: the theme never loads or unloads fonts.
/// Until the application assigns one (see
/// [Theme::assign_font_to_all](crate::theme::Theme::assign_font_to_all)) it
/// stays `None` and the text layer falls back to whatever it does without a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextTheme {
    /// Font size in pixels.
    pub font_size: i32,
    /// Text color.
    pub tint: Color,
    /// Font to draw with, owned by the text layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_font: Option<FontId>,
}

impl TextTheme {
    /// 12px white text with no font assigned.
    pub const DEFAULT: Self = Self::new(12, Color::WHITE);

    /// Create a text theme with no font assigned.
    pub const fn new(font_size: i32, tint: Color) -> Self {
        Self {
            font_size,
            tint,
            used_font: None,
        }
    }

    /// Replace the font handle.
    pub const fn with_font(mut self, font: Option<FontId>) -> Self {
        self.used_font = font;
        self
    }
}

impl Default for TextTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_font() {
        let text = TextTheme::default();
        assert_eq!(text.font_size, 12);
        assert_eq!(text.tint, Color::rgba8(255, 255, 255, 255));
        assert_eq!(text.used_font, None);
    }

    #[test]
    fn test_with_font() {
        let text = TextTheme::new(9, Color::BLACK).with_font(Some(FontId::new(3)));
        assert_eq!(text.used_font, Some(FontId::new(3)));
        assert_eq!(text.font_size, 9);
    }
}
