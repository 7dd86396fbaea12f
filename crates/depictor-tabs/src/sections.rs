//! Repeating view sequences shared by the tab builders.

use depictor_package::{ChangelogEntry, Screenshots};
use depictor_views::{Alignment, ItemSize, Screenshot, ViewNode};

/// Vertical gap used between blocks.
pub const SPACING: u32 = 12;

pub const SCREENSHOT_CORNER_RADIUS: u32 = 6;
pub const SCREENSHOT_ITEM_SIZE: ItemSize = ItemSize::new(160, 346);
const SCREENSHOT_LABEL: &str = "Screenshot";

/// Version/date header, change notes and a trailing gap for one release.
pub fn changelog_row(entry: &ChangelogEntry) -> [ViewNode; 3] {
    [
        ViewNode::layer(vec![
            ViewNode::subheader(&entry.version_number, Alignment::Left, true),
            ViewNode::subheader(&entry.date, Alignment::Right, false),
        ]),
        ViewNode::spaced_markdown(&entry.changes),
        ViewNode::spacer(SPACING),
    ]
}

/// Separator, plus a source link framed by a second separator when `link`
/// is non-empty.
pub fn source_code_section(link: &str) -> Vec<ViewNode> {
    if link.is_empty() {
        vec![ViewNode::Separator]
    } else {
        vec![
            ViewNode::Separator,
            ViewNode::table_button("View source code", link),
            ViewNode::Separator,
        ]
    }
}

/// Screenshot gallery for package `id`, or nothing when the list signals no
/// screenshots (see [`Screenshots::is_available`]).
pub fn screenshots_section(id: &str, screenshots: &Screenshots, api_url: &str) -> Vec<ViewNode> {
    if !screenshots.is_available() {
        return Vec::new();
    }

    let items = screenshots
        .screenshots
        .iter()
        .map(|entry| {
            let url = format!("{api_url}/{id}/screenshots/{entry}");
            Screenshot {
                full_size_url: url.clone(),
                url,
                accessibility_text: SCREENSHOT_LABEL.to_owned(),
            }
        })
        .collect();

    vec![ViewNode::Screenshots {
        item_corner_radius: SCREENSHOT_CORNER_RADIUS,
        item_size: SCREENSHOT_ITEM_SIZE,
        screenshots: items,
    }]
}
