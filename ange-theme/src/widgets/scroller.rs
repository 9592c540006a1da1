use serde::{Deserialize, Serialize};

use crate::geometry::Dimension;
use crate::state::{StateSet, WidgetState};

use super::rect::RectTheme;

/// Theme of the vertical scroller widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VScrollerTheme {
    /// Track colors.
    pub base: RectTheme,
    /// Slider colors per interaction state.
    pub slider: StateSet<RectTheme>,
    /// Border thickness of the track.
    pub base_border_size: Dimension<i32>,
    /// Border thickness of the slider.
    pub slider_border_size: Dimension<i32>,
    /// Width of the scroller.
    pub width: i32,
}

impl VScrollerTheme {
    /// Baseline scroller look.
    pub const DEFAULT: Self = Self {
        base: RectTheme::DEFAULT,
        slider: StateSet::splat(RectTheme::DEFAULT),
        base_border_size: Dimension::new(1, 1),
        slider_border_size: Dimension::new(1, 1),
        width: 18,
    };

    /// Slider colors for the given interaction state.
    pub fn slider_state(&self, state: WidgetState) -> &RectTheme {
        &self.slider[state]
    }
}

impl Default for VScrollerTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let scroller = VScrollerTheme::default();
        assert_eq!(scroller.base, RectTheme::DEFAULT);
        assert_eq!(*scroller.slider_state(WidgetState::Hover), RectTheme::DEFAULT);
        assert_eq!(scroller.base_border_size, Dimension::new(1, 1));
        assert_eq!(scroller.slider_border_size, Dimension::new(1, 1));
        assert_eq!(scroller.width, 18);
    }
}
