//! Per-widget theme records.
//!
//! Every record is a plain `Copy` value with public fields and an associated
//! `DEFAULT` constant giving the toolkit's baseline look: opaque white fills
//! with mid-gray borders. Values are never validated here; negative sizes or
//! odd radii are passed through to the renderer as-is.

/// Themes for solid rectangles, background panels and images.
pub mod rect;
/// Theme for text.
pub mod text;
/// Theme for simple buttons.
pub mod button;
/// Theme for single line inputs.
pub mod input;
/// Theme for vertical scrollers.
pub mod scroller;
/// Theme for progress bars.
pub mod progress;
/// Theme for context menus.
pub mod context_menu;
/// Theme for checkboxes.
pub mod checkbox;

pub use button::SimpleButtonTheme;
pub use checkbox::CheckboxTheme;
pub use context_menu::ContextMenuTheme;
pub use input::SimpleInputTheme;
pub use progress::ProgressBarTheme;
pub use rect::{BackgroundTheme, ImageTheme, RectTheme};
pub use scroller::VScrollerTheme;
pub use text::TextTheme;
