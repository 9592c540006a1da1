use serde::{Deserialize, Serialize};

use crate::geometry::{CornerRadii, Dimension};
use crate::state::{StateSet, WidgetState};

use super::rect::RectTheme;
use super::text::TextTheme;

/// Theme of the simple button widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleButtonTheme {
    /// Fill and border color per interaction state.
    pub base: StateSet<RectTheme>,
    /// Border thickness on the x and y axis.
    pub border_size: Dimension<i32>,
    /// Label theme.
    pub text: TextTheme,
    /// Corner radii.
    pub radii: CornerRadii,
}

impl SimpleButtonTheme {
    /// Default rectangles in every state, a one pixel border and 10px corners.
    pub const DEFAULT: Self = Self::new(
        RectTheme::DEFAULT,
        RectTheme::DEFAULT,
        RectTheme::DEFAULT,
        Dimension::new(1, 1),
        TextTheme::DEFAULT,
    );

    /// Corner radius used unless [Self::with_radii] says otherwise.
    pub const DEFAULT_RADIUS: f32 = 10.0;

    /// Create a button theme with the default 10px corners.
    pub const fn new(
        normal: RectTheme,
        hover: RectTheme,
        active: RectTheme,
        border_size: Dimension<i32>,
        text: TextTheme,
    ) -> Self {
        Self {
            base: StateSet::new(normal, hover, active),
            border_size,
            text,
            radii: CornerRadii::uniform(Self::DEFAULT_RADIUS),
        }
    }

    /// Replace the corner radii.
    pub const fn with_radii(mut self, radii: CornerRadii) -> Self {
        self.radii = radii;
        self
    }

    /// Colors for the given interaction state.
    pub fn state(&self, state: WidgetState) -> &RectTheme {
        &self.base[state]
    }
}

impl Default for SimpleButtonTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
