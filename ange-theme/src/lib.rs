#![warn(missing_docs)]

//! # Ange Theming
//!
//! Appearance data for the Ange widget toolkit: one record per widget kind
//! describing its colors, borders, corner radii, fonts and spacing, the
//! [Theme](theme::Theme) aggregate bundling them, and the default look in
//! [DEF_THEME](theme::DEF_THEME).
//!
//! Nothing here draws. Widgets read the values and hand them to the renderer;
//! [Color](color::Color), [CornerRadii](geometry::CornerRadii) and the
//! geometry types convert into their `vello` counterparts for that.
//!
//! ## Quick Start
//!
//! ```rust
//! use ange_theme::font::FontId;
//! use ange_theme::state::WidgetState;
//! use ange_theme::theme::DEF_THEME;
//!
//! // Copy the default theme, then give it the font the text layer loaded.
//! let mut theme = DEF_THEME;
//! theme.assign_font_to_all(Some(FontId::new(0)));
//!
//! let hovered = theme.simple_button_bg.state(WidgetState::Hover);
//! let fill: vello::peniko::Color = hovered.tint.into();
//! # let _ = fill;
//! ```
//!
//! ## Layers
//!
//! 1. **Values**: [color], [geometry], [font], [state]
//! 2. **Records**: [widgets] and the [theme] aggregate
//! 3. **Files**: [persist] reads and writes themes as TOML or JSON
//! 4. **Runtime**: [registry], [config], [manager] and [watcher] pick the
//!    theme to use, switch it and hot-reload it
//!
//! Records are plain `Copy` values without interior mutability. Share a
//! mutable theme between threads through [manager::SharedTheme].

/// Contains the [color::Color] type.
pub mod color;
/// Contains theme configuration from the environment and files.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [font::FontId] handle.
pub mod font;
/// Contains [geometry::Dimension], [geometry::Point] and [geometry::CornerRadii].
pub mod geometry;
/// Contains runtime theme management.
pub mod manager;
/// Contains theme file loading and saving.
pub mod persist;
/// Contains the named theme registry.
pub mod registry;
/// Contains [state::WidgetState] and [state::StateSet].
pub mod state;
/// Contains the [theme::Theme] aggregate and the default theme.
pub mod theme;
/// Contains theme file hot reloading.
pub mod watcher;
/// Contains the per-widget theme records.
pub mod widgets;

pub use error::{ThemeError, ThemeResult};
pub use theme::{Theme, DEF_THEME};
