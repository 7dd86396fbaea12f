//! View node sum type.

use serde::{Serialize, Serializer};

use crate::screenshot::{ItemSize, Screenshot};

/// Horizontal text alignment for subheaders.
///
/// Serialized as the renderer's integer code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Integer code understood by the renderer.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }
}

impl Serialize for Alignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A single node in a depiction view tree.
///
/// The `class` tag and field names form the wire contract with the
/// renderer and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "class")]
pub enum ViewNode {
    /// Vertical blank space.
    #[serde(rename = "DepictionSpacerView")]
    Spacer { spacing: u32 },

    /// Full-width button.
    #[serde(rename = "DepictionButtonView")]
    Button {
        text: String,
        action: String,
        #[serde(rename = "yPadding")]
        y_padding: u32,
    },

    /// Markdown body text.
    #[serde(rename = "DepictionMarkdownView")]
    Markdown {
        markdown: String,
        #[serde(rename = "useSpacing", skip_serializing_if = "is_false")]
        use_spacing: bool,
    },

    /// Section header.
    #[serde(rename = "DepictionHeaderView")]
    Header { title: String },

    /// Smaller header, usually composed inside a layer.
    #[serde(rename = "DepictionSubheaderView")]
    Subheader {
        title: String,
        alignment: Alignment,
        #[serde(rename = "useBoldText", skip_serializing_if = "is_false")]
        use_bold_text: bool,
    },

    /// Table row with a static value.
    #[serde(rename = "DepictionTableTextView")]
    TableText { title: String, text: String },

    /// Table row that opens `action` when tapped.
    #[serde(rename = "DepictionTableButtonView")]
    TableButton { title: String, action: String },

    /// Horizontal rule.
    #[serde(rename = "DepictionSeparatorView")]
    Separator,

    /// Children drawn on top of each other.
    #[serde(rename = "DepictionLayerView")]
    Layer { views: Vec<ViewNode> },

    /// Horizontally scrolling screenshot gallery.
    #[serde(rename = "DepictionScreenshotsView")]
    Screenshots {
        #[serde(rename = "itemCornerRadius")]
        item_corner_radius: u32,
        #[serde(rename = "itemSize")]
        item_size: ItemSize,
        screenshots: Vec<Screenshot>,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl ViewNode {
    pub fn spacer(spacing: u32) -> Self {
        Self::Spacer { spacing }
    }

    pub fn button(text: impl Into<String>, action: impl Into<String>, y_padding: u32) -> Self {
        Self::Button {
            text: text.into(),
            action: action.into(),
            y_padding,
        }
    }

    pub fn markdown(markdown: impl Into<String>) -> Self {
        Self::Markdown {
            markdown: markdown.into(),
            use_spacing: false,
        }
    }

    /// Markdown node with the renderer's extra paragraph spacing enabled.
    pub fn spaced_markdown(markdown: impl Into<String>) -> Self {
        Self::Markdown {
            markdown: markdown.into(),
            use_spacing: true,
        }
    }

    pub fn header(title: impl Into<String>) -> Self {
        Self::Header {
            title: title.into(),
        }
    }

    pub fn subheader(title: impl Into<String>, alignment: Alignment, use_bold_text: bool) -> Self {
        Self::Subheader {
            title: title.into(),
            alignment,
            use_bold_text,
        }
    }

    pub fn table_text(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::TableText {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn table_button(title: impl Into<String>, action: impl Into<String>) -> Self {
        Self::TableButton {
            title: title.into(),
            action: action.into(),
        }
    }

    pub fn layer(views: Vec<ViewNode>) -> Self {
        Self::Layer { views }
    }

    /// Kind label, independent of the wire class name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Spacer { .. } => "spacer",
            Self::Button { .. } => "button",
            Self::Markdown { .. } => "markdown",
            Self::Header { .. } => "header",
            Self::Subheader { .. } => "subheader",
            Self::TableText { .. } => "table-text",
            Self::TableButton { .. } => "table-button",
            Self::Separator => "separator",
            Self::Layer { .. } => "layer",
            Self::Screenshots { .. } => "screenshots-gallery",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_spacer_serializes_class_and_spacing() {
        let value = serde_json::to_value(ViewNode::spacer(12)).unwrap();
        assert_eq!(value, json!({"class": "DepictionSpacerView", "spacing": 12}));
    }

    #[test]
    fn test_separator_serializes_class_only() {
        let value = serde_json::to_value(ViewNode::Separator).unwrap();
        assert_eq!(value, json!({"class": "DepictionSeparatorView"}));
    }

    #[test]
    fn test_button_uses_camel_case_padding() {
        let value = serde_json::to_value(ViewNode::button("Donate", "https://example.com", 10)).unwrap();
        assert_eq!(
            value,
            json!({
                "class": "DepictionButtonView",
                "text": "Donate",
                "action": "https://example.com",
                "yPadding": 10
            })
        );
    }

    #[test]
    fn test_markdown_omits_spacing_flag_when_disabled() {
        let plain = serde_json::to_value(ViewNode::markdown("**hi**")).unwrap();
        assert_eq!(plain, json!({"class": "DepictionMarkdownView", "markdown": "**hi**"}));

        let spaced = serde_json::to_value(ViewNode::spaced_markdown("**hi**")).unwrap();
        assert_eq!(
            spaced,
            json!({"class": "DepictionMarkdownView", "markdown": "**hi**", "useSpacing": true})
        );
    }

    #[test]
    fn test_subheader_alignment_is_integer() {
        let bold = serde_json::to_value(ViewNode::subheader("1.0", Alignment::Left, true)).unwrap();
        assert_eq!(
            bold,
            json!({
                "class": "DepictionSubheaderView",
                "title": "1.0",
                "alignment": 0,
                "useBoldText": true
            })
        );

        let right = serde_json::to_value(ViewNode::subheader("Jan 1", Alignment::Right, false)).unwrap();
        assert_eq!(
            right,
            json!({"class": "DepictionSubheaderView", "title": "Jan 1", "alignment": 2})
        );
    }

    #[test]
    fn test_table_rows() {
        let text = serde_json::to_value(ViewNode::table_text("Version", "1.2")).unwrap();
        assert_eq!(
            text,
            json!({"class": "DepictionTableTextView", "title": "Version", "text": "1.2"})
        );

        let button = serde_json::to_value(ViewNode::table_button("Twitter", "https://twitter.com/x")).unwrap();
        assert_eq!(
            button,
            json!({
                "class": "DepictionTableButtonView",
                "title": "Twitter",
                "action": "https://twitter.com/x"
            })
        );
    }

    #[test]
    fn test_layer_nests_children() {
        let layer = ViewNode::layer(vec![ViewNode::header("A"), ViewNode::Separator]);
        let value = serde_json::to_value(layer).unwrap();
        assert_eq!(
            value,
            json!({
                "class": "DepictionLayerView",
                "views": [
                    {"class": "DepictionHeaderView", "title": "A"},
                    {"class": "DepictionSeparatorView"}
                ]
            })
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ViewNode::Separator.kind(), "separator");
        assert_eq!(ViewNode::table_text("a", "b").kind(), "table-text");
        assert_eq!(ViewNode::layer(Vec::new()).kind(), "layer");
    }
}
