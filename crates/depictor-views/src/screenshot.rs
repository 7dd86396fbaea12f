//! Screenshot gallery items.

use std::fmt;

use serde::{Serialize, Serializer};

/// One image in a screenshot gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    /// Image shown in the gallery strip.
    pub url: String,
    /// Image shown when the user taps the item.
    #[serde(rename = "fullSizeURL")]
    pub full_size_url: String,
    /// Label read by assistive technology.
    #[serde(rename = "accessibilityText")]
    pub accessibility_text: String,
}

/// Gallery item size in points.
///
/// Serialized in the renderer's brace form, e.g. `"{160, 346}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSize {
    pub width: u32,
    pub height: u32,
}

impl ItemSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ItemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.width, self.height)
    }
}

impl Serialize for ItemSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
