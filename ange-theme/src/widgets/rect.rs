use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{CornerRadii, Dimension};

/// Fill and border color of a rectangular area.
///
/// This is the building block every other record is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RectTheme {
    /// Fill color.
    pub tint: Color,
    /// Border color.
    pub border_color: Color,
}

impl RectTheme {
    /// White fill with a mid-gray border.
    pub const DEFAULT: Self = Self::new(Color::WHITE, Color::GRAY);

    /// Create a rectangle theme.
    pub const fn new(tint: Color, border_color: Color) -> Self {
        Self { tint, border_color }
    }

    /// Use one color for both fill and border.
    pub const fn solid(color: Color) -> Self {
        Self::new(color, color)
    }
}

impl Default for RectTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Theme of the background panel widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundTheme {
    /// Fill and border color.
    pub base: RectTheme,
    /// Border thickness on the x and y axis.
    pub border_size: Dimension<i32>,
    /// Corner radii.
    pub radii: CornerRadii,
}

impl BackgroundTheme {
    /// White panel, one pixel gray border, square corners.
    pub const DEFAULT: Self = Self::new(Color::WHITE, Color::GRAY, Dimension::new(1, 1));

    /// Create a background theme with square corners.
    pub const fn new(tint: Color, border_color: Color, border_size: Dimension<i32>) -> Self {
        Self {
            base: RectTheme::new(tint, border_color),
            border_size,
            radii: CornerRadii::ZERO,
        }
    }

    /// Replace the corner radii.
    pub const fn with_radii(mut self, radii: CornerRadii) -> Self {
        self.radii = radii;
        self
    }
}

impl Default for BackgroundTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Theme of the image widget.
///
/// Images are drawn as plain rectangles, so there are no radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTheme {
    /// Image tint and border color.
    pub base: RectTheme,
    /// Border thickness on the x and y axis.
    pub border_size: Dimension<i32>,
}

impl ImageTheme {
    /// Untinted image without a border.
    pub const DEFAULT: Self = Self::new(Color::WHITE, Color::TRANSPARENT, Dimension::new(0, 0));

    /// Create an image theme.
    pub const fn new(tint: Color, border_color: Color, border_size: Dimension<i32>) -> Self {
        Self {
            base: RectTheme::new(tint, border_color),
            border_size,
        }
    }
}

impl Default for ImageTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
