#![warn(missing_docs)]

//! Themes and default appearance for Ange UI widgets.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use ange_theme as theme;

/// A "prelude" for users of the Ange theming crates.
///
/// Importing this module brings into scope the types needed to pick, tweak
/// and share a theme.
///
/// ```rust
/// use ange::prelude::*;
///
/// let mut theme = DEF_THEME;
/// theme.v_scroller.width = 12;
/// theme.assign_font_to_all(Some(FontId::new(0)));
/// ```
pub mod prelude {
    // Records
    pub use crate::theme::theme::{Theme, DEF_THEME};
    pub use crate::theme::widgets::{
        BackgroundTheme, CheckboxTheme, ContextMenuTheme, ImageTheme, ProgressBarTheme,
        RectTheme, SimpleButtonTheme, SimpleInputTheme, TextTheme, VScrollerTheme,
    };

    // Values
    pub use crate::theme::color::Color;
    pub use crate::theme::font::FontId;
    pub use crate::theme::geometry::{CornerRadii, Dimension, Point};
    pub use crate::theme::state::{StateSet, WidgetState};

    // Runtime
    pub use crate::theme::config::{ThemeConfig, ThemeSource};
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::manager::{SharedTheme, ThemeManager};
    pub use crate::theme::registry::ThemeRegistry;
}
