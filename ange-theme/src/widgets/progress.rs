use serde::{Deserialize, Serialize};

use super::rect::BackgroundTheme;
use super::text::TextTheme;

/// Theme of the progress bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarTheme {
    /// Track drawn behind the fill.
    pub base: BackgroundTheme,
    /// Part of the track covered by progress.
    pub fill: BackgroundTheme,
    /// Theme of the progress caption.
    pub text: TextTheme,
}

impl ProgressBarTheme {
    /// Default track, fill and caption.
    pub const DEFAULT: Self = Self::new(
        BackgroundTheme::DEFAULT,
        BackgroundTheme::DEFAULT,
        TextTheme::DEFAULT,
    );

    /// Create a progress bar theme.
    pub const fn new(base: BackgroundTheme, fill: BackgroundTheme, text: TextTheme) -> Self {
        Self { base, fill, text }
    }
}

impl Default for ProgressBarTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
