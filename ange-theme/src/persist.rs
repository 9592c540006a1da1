//! # Theme Files
//!
//! Themes are stored as TOML or JSON; the file extension picks the format.
//! Every record is `#[serde(default)]`, so a file only needs the values it
//! changes:
//!
//! ```toml
//! [v_scroller]
//! width = 12
//!
//! [content_text]
//! font_size = 14
//! tint = "#202020"
//! ```
//!
//! Missing values take the record defaults (see [Theme::default]), not the
//! values of [DEF_THEME](crate::theme::DEF_THEME). Colors are hex strings,
//! radii are `[top_left, top_right, bottom_right, bottom_left]` (see
//! [CornerRadii](crate::geometry::CornerRadii) for infinite and NaN radii) and
//! three-state sets are arrays in normal, hover, active order.

use std::fs;
use std::path::Path;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// A supported theme file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    /// TOML, `.toml`.
    Toml,
    /// JSON, `.json`.
    Json,
}

impl ThemeFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> ThemeResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ThemeError::unsupported_format(path)),
        }
    }
}

impl Theme {
    /// Parse a theme from TOML.
    pub fn from_toml_str(content: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the theme to TOML.
    pub fn to_toml_string(&self) -> ThemeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse a theme from JSON.
    pub fn from_json_str(content: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the theme to pretty-printed JSON.
    pub fn to_json_string(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a theme file.
    pub fn load<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let format = ThemeFormat::from_path(path)?;
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let parsed = match format {
            ThemeFormat::Toml => Self::from_toml_str(&content),
            ThemeFormat::Json => Self::from_json_str(&content),
        };
        let theme = parsed.map_err(|err| ThemeError::parse_error(path, err.to_string()))?;

        log::debug!("Loaded theme from {:?}", path);
        Ok(theme)
    }

    /// Write the theme to a file, overwriting it.
    ///
    /// TOML integers are signed 64-bit, so saving as TOML fails with
    /// [ThemeError::Serialization] when a `usize` value such as
    /// `checkbox.margins` exceeds [i64::MAX]. Nothing is written then; JSON
    /// has no such limit.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ThemeResult<()> {
        let path = path.as_ref();
        let content = match ThemeFormat::from_path(path)? {
            ThemeFormat::Toml => self.to_toml_string()?,
            ThemeFormat::Json => self.to_json_string()?,
        };
        fs::write(path, content)?;

        log::debug!("Saved theme to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::theme::DEF_THEME;

    #[test]
    fn test_partial_toml_uses_record_defaults() {
        let theme = Theme::from_toml_str(
            r##"
            [v_scroller]
            width = 12

            [content_text]
            tint = "#202020"
            "##,
        )
        .unwrap();

        assert_eq!(theme.v_scroller.width, 12);
        assert_eq!(theme.v_scroller.base, Theme::default().v_scroller.base);
        assert_eq!(theme.content_text.tint, Color::rgb8(0x20, 0x20, 0x20));
        assert_eq!(theme.content_text.font_size, 12);
        assert_eq!(theme.checkbox, Theme::default().checkbox);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ThemeFormat::from_path(Path::new("a.toml")).unwrap(), ThemeFormat::Toml);
        assert_eq!(ThemeFormat::from_path(Path::new("a.JSON")).unwrap(), ThemeFormat::Json);
        assert!(matches!(
            ThemeFormat::from_path(Path::new("a.yaml")),
            Err(ThemeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_bad_color_is_an_error() {
        let err = Theme::from_json_str(r##"{ "image": { "base": { "tint": "#12" } } }"##)
            .unwrap_err();
        assert!(matches!(err, ThemeError::Serialization(_)));
    }

    #[test]
    fn test_json_keeps_translucent_colors() {
        let json = DEF_THEME.to_json_string().unwrap();
        assert!(json.contains("\"#141414b4\""));
    }
}
