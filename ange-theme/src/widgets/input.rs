use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Dimension, Point};
use crate::state::{StateSet, WidgetState};

use super::rect::RectTheme;
use super::text::TextTheme;

/// Theme of the simple input widget.
///
/// `default_text` styles the placeholder shown while the input is empty,
/// `text` styles what the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleInputTheme {
    /// Fill and border color per interaction state.
    pub base: StateSet<RectTheme>,
    /// Border thickness on the x and y axis.
    pub border_size: Dimension<i32>,
    /// Placeholder text theme.
    pub default_text: TextTheme,
    /// Entered text theme.
    pub text: TextTheme,
    /// Text selection highlight.
    pub selection: Color,
    /// Caret color.
    pub prompt: Color,
    /// Color of the bar under the input.
    pub bar: Color,
    /// Offset of the text from the widget's top-left corner.
    pub margins: Point<i32>,
    /// Height of the bar under the input.
    pub bar_height: i32,
}

impl SimpleInputTheme {
    /// Baseline input look.
    pub const DEFAULT: Self = Self {
        base: StateSet::splat(RectTheme::DEFAULT),
        border_size: Dimension::new(1, 1),
        default_text: TextTheme::DEFAULT,
        text: TextTheme::DEFAULT,
        selection: Color::GRAY,
        prompt: Color::WHITE,
        bar: Color::WHITE,
        margins: Point::new(0, 0),
        bar_height: 2,
    };

    /// Colors for the given interaction state.
    pub fn state(&self, state: WidgetState) -> &RectTheme {
        &self.base[state]
    }
}

impl Default for SimpleInputTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = SimpleInputTheme::default();
        assert_eq!(*input.state(WidgetState::Active), RectTheme::DEFAULT);
        assert_eq!(input.border_size, Dimension::new(1, 1));
        assert_eq!(input.selection, Color::rgba8(128, 128, 128, 255));
        assert_eq!(input.prompt, Color::WHITE);
        assert_eq!(input.bar, Color::WHITE);
        assert_eq!(input.margins, Point::new(0, 0));
        assert_eq!(input.bar_height, 2);
        assert_eq!(input.default_text.used_font, None);
    }
}
