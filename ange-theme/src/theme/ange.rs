use crate::color::Color;
use crate::geometry::{Dimension, Point};
use crate::state::StateSet;
use crate::theme::Theme;
use crate::widgets::{
    BackgroundTheme, CheckboxTheme, ContextMenuTheme, ImageTheme, ProgressBarTheme, RectTheme,
    SimpleButtonTheme, SimpleInputTheme, TextTheme, VScrollerTheme,
};

/// The default Ange widget theme.
///
/// Every font handle is `None`; the application assigns its font after
/// loading it (the look was designed around Noto). Treat this as read-only
/// and copy it to customize.
pub static DEF_THEME: Theme = Theme::ange();

const HEADER_TINT: Color = Color::rgb8(107, 122, 138);
const PRESSED: RectTheme = RectTheme::new(Color::from_hex(0x444042), Color::from_hex(0x2a192d));
const MENU_HIGHLIGHT: Color = Color::rgb8(145, 201, 247);

impl Theme {
    /// Build the default Ange theme. [DEF_THEME] holds the result.
    pub const fn ange() -> Self {
        Self {
            background: BackgroundTheme::new(
                Color::rgb8(242, 245, 250),
                Color::rgb8(230, 233, 235),
                Dimension::new(1, 1),
            ),
            image: ImageTheme::new(Color::WHITE, Color::TRANSPARENT, Dimension::new(0, 0)),
            content_text: TextTheme::new(12, Color::BLACK),
            header1: TextTheme::new(24, HEADER_TINT),
            header2: TextTheme::new(19, HEADER_TINT),
            header3: TextTheme::new(15, HEADER_TINT),
            simple_button_bg: SimpleButtonTheme::new(
                RectTheme::new(Color::rgb8(130, 133, 135), Color::rgb8(60, 60, 43)),
                RectTheme::new(Color::rgb8(77, 79, 80), Color::rgb8(26, 30, 33)),
                PRESSED,
                Dimension::new(2, 2),
                // The blue channel was authored as 2555; this is its 8-bit truncation.
                TextTheme::new(15, Color::rgb8(255, 255, 251)),
            ),
            simple_button_img: SimpleButtonTheme::new(
                RectTheme::new(Color::from_hex(0x7b7478), Color::from_hex(0x4d2d52)),
                RectTheme::new(Color::from_hex(0xFFFFFF), Color::from_hex(0xFFFFFF)),
                PRESSED,
                Dimension::new(0, 0),
                TextTheme::new(12, Color::BLACK),
            ),
            simple_input: SimpleInputTheme {
                base: StateSet::new(
                    RectTheme::new(Color::rgb8(130, 133, 135), Color::rgb8(230, 233, 235)),
                    RectTheme::new(Color::rgb8(77, 79, 80), Color::rgb8(26, 30, 33)),
                    PRESSED,
                ),
                border_size: Dimension::new(0, 0),
                default_text: TextTheme::new(12, Color::rgba8(20, 20, 20, 180)),
                text: TextTheme::new(12, Color::WHITE),
                selection: Color::GRAY,
                prompt: Color::WHITE,
                bar: Color::rgb8(26, 30, 33),
                margins: Point::new(4, 4),
                bar_height: 1,
            },
            v_scroller: VScrollerTheme {
                base: RectTheme::new(Color::rgb8(241, 241, 241), Color::TRANSPARENT),
                slider: StateSet::new(
                    RectTheme::new(Color::rgb8(193, 193, 193), Color::TRANSPARENT),
                    RectTheme::new(Color::rgb8(168, 168, 168), Color::TRANSPARENT),
                    RectTheme::new(Color::rgb8(120, 120, 120), Color::TRANSPARENT),
                ),
                base_border_size: Dimension::new(0, 0),
                slider_border_size: Dimension::new(0, 0),
                width: 18,
            },
            progress_bar: ProgressBarTheme::new(
                BackgroundTheme::new(Color::WHITE, Color::GRAY, Dimension::new(1, 1)),
                BackgroundTheme::new(
                    Color::rgb8(100, 100, 255),
                    Color::rgb8(100, 100, 255),
                    Dimension::new(0, 0),
                ),
                TextTheme::new(12, Color::BLACK),
            ),
            context_menu: ContextMenuTheme::new(
                BackgroundTheme::new(
                    Color::rgb8(242, 242, 242),
                    Color::rgb8(100, 100, 255),
                    Dimension::new(1, 1),
                ),
                SimpleButtonTheme::new(
                    RectTheme::solid(Color::rgb8(242, 242, 242)),
                    RectTheme::solid(MENU_HIGHLIGHT),
                    RectTheme::solid(MENU_HIGHLIGHT),
                    Dimension::new(1, 1),
                    TextTheme::new(9, Color::BLACK),
                ),
                ImageTheme::new(Color::WHITE, Color::TRANSPARENT, Dimension::new(0, 0)),
                20,
            ),
            checkbox: CheckboxTheme::new(
                SimpleButtonTheme::new(
                    RectTheme::new(Color::rgb8(242, 242, 242), Color::BLACK),
                    RectTheme::new(MENU_HIGHLIGHT, Color::BLACK),
                    RectTheme::new(MENU_HIGHLIGHT, Color::BLACK),
                    Dimension::new(1, 1),
                    TextTheme::new(9, Color::BLACK),
                ),
                BackgroundTheme::new(Color::BLACK, Color::rgb8(230, 233, 235), Dimension::new(1, 1)),
                Dimension::new(2, 2),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_values() {
        assert_eq!(DEF_THEME.background.base.tint, Color::rgba8(242, 245, 250, 255));
        assert_eq!(DEF_THEME.v_scroller.width, 18);
        assert_eq!(DEF_THEME.checkbox.margins, Dimension::new(2, 2));
        assert_eq!(DEF_THEME.simple_input.bar_height, 1);
    }

    #[test]
    fn test_packed_hex_colors_are_opaque() {
        let pressed = DEF_THEME.simple_button_bg.base[2];
        assert_eq!(pressed.tint, Color::rgba8(0x44, 0x40, 0x42, 255));
        assert_eq!(pressed.border_color, Color::rgba8(0x2a, 0x19, 0x2d, 255));
        assert_eq!(DEF_THEME.simple_button_img.base[1], RectTheme::solid(Color::WHITE));
    }

    #[test]
    fn test_unspecified_fields_keep_record_defaults() {
        assert_eq!(DEF_THEME.simple_button_bg.radii.0, [10.0; 4]);
        assert_eq!(DEF_THEME.context_menu.item.radii.0, [10.0; 4]);
        assert_eq!(DEF_THEME.background.radii.0, [0.0; 4]);
        assert_eq!(DEF_THEME.progress_bar.fill.radii.0, [0.0; 4]);
    }

    #[test]
    fn test_no_fonts_assigned() {
        assert!(DEF_THEME.text_themes().iter().all(|text| text.used_font.is_none()));
        assert_eq!(DEF_THEME.checkbox.base.text.used_font, None);
    }
}
