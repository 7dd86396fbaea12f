//! Display record: description, contact details and changelog.
//!
//! Stored per package as `display.json` (or `display.yaml`) with camelCase
//! keys:
//!
//! ```json
//! {
//!   "information": { "description": "Tweak **description**", "sourceCodeLink": "https://git.example/x" },
//!   "contact": { "email": "dev@example.com", "twitter": "dev" },
//!   "changelog": [ { "versionNumber": "1.0", "date": "2023-05-09", "changes": "- Initial release" } ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Human-facing package information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub information: Information,
    pub contact: Contact,
    /// Release history, oldest first.
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Information {
    /// Markdown description, rendered verbatim.
    pub description: String,
    /// Source repository URL; empty when the package has none.
    #[serde(default)]
    pub source_code_link: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    /// Twitter handle without the leading `@`.
    pub twitter: String,
}

/// One released version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub version_number: String,
    pub date: String,
    /// Markdown list of changes.
    pub changes: String,
}

impl ChangelogEntry {
    pub fn new(
        version_number: impl Into<String>,
        date: impl Into<String>,
        changes: impl Into<String>,
    ) -> Self {
        Self {
            version_number: version_number.into(),
            date: date.into(),
            changes: changes.into(),
        }
    }
}

impl Display {
    /// Parse a display record from JSON.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse a display record from YAML.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Most recent changelog entry, if any.
    #[must_use]
    pub fn latest_change(&self) -> Option<&ChangelogEntry> {
        self.changelog.last()
    }
}
