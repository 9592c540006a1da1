use serde::{Deserialize, Serialize};

use crate::geometry::Dimension;

use super::button::SimpleButtonTheme;
use super::rect::BackgroundTheme;

/// Theme of the checkbox widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxTheme {
    /// Box drawn as a button.
    pub base: SimpleButtonTheme,
    /// Mark shown when checked.
    pub fill: BackgroundTheme,
    /// Gap between the box border and the mark; sets the mark's size.
    pub margins: Dimension<usize>,
}

impl CheckboxTheme {
    /// Default box and mark with a 3px gap.
    pub const DEFAULT: Self = Self::new(
        SimpleButtonTheme::DEFAULT,
        BackgroundTheme::DEFAULT,
        Dimension::new(3, 3),
    );

    /// Create a checkbox theme.
    pub const fn new(
        base: SimpleButtonTheme,
        fill: BackgroundTheme,
        margins: Dimension<usize>,
    ) -> Self {
        Self { base, fill, margins }
    }
}

impl Default for CheckboxTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
