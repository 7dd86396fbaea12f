//! Tab and root depiction containers.

use serde::Serialize;

use crate::node::ViewNode;

/// A named stack of views rendered as one depiction tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename = "DepictionStackView")]
pub struct TabView {
    /// Label shown on the tab switcher.
    #[serde(rename = "tabname")]
    pub tab_name: String,
    /// Tab content, top to bottom.
    pub views: Vec<ViewNode>,
}

impl TabView {
    pub fn new(tab_name: impl Into<String>, views: Vec<ViewNode>) -> Self {
        Self {
            tab_name: tab_name.into(),
            views,
        }
    }
}

/// Root native depiction document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename = "DepictionTabView")]
pub struct Depiction {
    /// Oldest depiction format version the renderer must support.
    #[serde(rename = "minVersion")]
    pub min_version: String,
    /// Accent color, e.g. `#6f42c1`.
    #[serde(rename = "tintColor", skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,
    pub tabs: Vec<TabView>,
}
