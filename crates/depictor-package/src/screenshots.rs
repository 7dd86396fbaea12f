//! Screenshot list.

use serde::{Deserialize, Serialize};

/// Marker an upstream source puts in place of a file name when a package has
/// no screenshots.
pub const NO_SCREENSHOTS: &str = "*";

/// Screenshot file names, relative to the package's screenshot directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshots {
    #[serde(default)]
    pub screenshots: Vec<String>,
}

impl Screenshots {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            screenshots: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a gallery should be shown.
    ///
    /// False for an empty list, or when the last path segment of the first
    /// entry is the [`NO_SCREENSHOTS`] marker. Later entries are not checked.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.screenshots
            .first()
            .is_some_and(|first| first.rsplit('/').next() != Some(NO_SCREENSHOTS))
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
