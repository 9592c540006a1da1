//! Font handles referenced by text themes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-owning handle to a font loaded by the text layer.
///
/// The id indexes a font registry owned elsewhere. Themes only copy the
/// handle around; dropping a theme never unloads the font it points at, and
/// the registry owner decides when a handle stops being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(u32);

impl FontId {
    /// Wrap a raw registry index.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw registry index.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for FontId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font#{}", self.0)
    }
}
