//! # Theme Aggregate
//!
//! [Theme] bundles one record per widget kind, and is what widgets receive
//! when they are built. The toolkit's out-of-the-box look lives in
//! [DEF_THEME]; copy it before customizing.
//!
//! ## Fonts
//!
//! Text themes hold a non-owning [FontId]. Fonts are loaded by the text
//! layer, so a fresh theme has no font at all. Once the application has
//! loaded its font it hands the handle to every text theme in one call:
//!
//! ```rust
//! use ange_theme::font::FontId;
//! use ange_theme::theme::DEF_THEME;
//!
//! let mut theme = DEF_THEME;
//! theme.assign_font_to_all(Some(FontId::new(0)));
//! assert!(theme.text_themes().iter().all(|text| text.used_font == Some(FontId::new(0))));
//! ```
//!
//! Assigning `None` clears every handle again. Neither call loads or unloads
//! anything.
//!
//! ## Persistence
//!
//! Themes round-trip through TOML and JSON, see [crate::persist].

use serde::{Deserialize, Serialize};

use crate::font::FontId;
use crate::widgets::{
    BackgroundTheme, CheckboxTheme, ContextMenuTheme, ImageTheme, ProgressBarTheme,
    SimpleButtonTheme, SimpleInputTheme, TextTheme, VScrollerTheme,
};

/// The built-in Ange theme.
pub mod ange;

pub use ange::DEF_THEME;

/// Number of text themes [Theme::assign_font_to_all] writes to.
pub const FONT_BEARING_TEXT_THEMES: usize = 10;

/// The themes of every basic widget of the toolkit.
///
/// `Theme::default()` puts every record at its own default. That differs from
/// [DEF_THEME], which is the styled look the toolkit ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Background panels.
    pub background: BackgroundTheme,
    /// Images.
    pub image: ImageTheme,
    /// Body text.
    pub content_text: TextTheme,
    /// Largest heading.
    pub header1: TextTheme,
    /// Second level heading.
    pub header2: TextTheme,
    /// Third level heading.
    pub header3: TextTheme,
    /// Buttons with a colored background.
    pub simple_button_bg: SimpleButtonTheme,
    /// Buttons showing an image.
    pub simple_button_img: SimpleButtonTheme,
    /// Single line inputs.
    pub simple_input: SimpleInputTheme,
    /// Vertical scrollers.
    pub v_scroller: VScrollerTheme,
    /// Progress bars.
    pub progress_bar: ProgressBarTheme,
    /// Context menus.
    pub context_menu: ContextMenuTheme,
    /// Checkboxes.
    pub checkbox: CheckboxTheme,
}

impl Theme {
    /// Point every font-bearing text theme at `font`.
    ///
    /// Writes `used_font` of the content text, the three headers, both
    /// button labels, both input texts, the progress bar caption and the
    /// context menu entries. Nothing else changes; in particular the
    /// checkbox label keeps its font. Passing `None` clears the handles.
    pub fn assign_font_to_all(&mut self, font: Option<FontId>) {
        log::debug!(
            "Assigning font {:?} to {} text themes",
            font,
            FONT_BEARING_TEXT_THEMES
        );
        for text in self.text_themes_mut() {
            text.used_font = font;
        }
    }

    /// Builder form of [Self::assign_font_to_all].
    pub fn with_font(mut self, font: Option<FontId>) -> Self {
        self.assign_font_to_all(font);
        self
    }

    /// The text themes [Self::assign_font_to_all] writes to.
    pub fn text_themes(&self) -> [&TextTheme; FONT_BEARING_TEXT_THEMES] {
        [
            &self.content_text,
            &self.header1,
            &self.header2,
            &self.header3,
            &self.simple_button_bg.text,
            &self.simple_button_img.text,
            &self.simple_input.text,
            &self.simple_input.default_text,
            &self.progress_bar.text,
            &self.context_menu.item.text,
        ]
    }

    fn text_themes_mut(&mut self) -> [&mut TextTheme; FONT_BEARING_TEXT_THEMES] {
        [
            &mut self.content_text,
            &mut self.header1,
            &mut self.header2,
            &mut self.header3,
            &mut self.simple_button_bg.text,
            &mut self.simple_button_img.text,
            &mut self.simple_input.text,
            &mut self.simple_input.default_text,
            &mut self.progress_bar.text,
            &mut self.context_menu.item.text,
        ]
    }
}
