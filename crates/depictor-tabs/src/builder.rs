//! Tab assembly.
//!
//! [`TabBuilder`] turns a [`TabRequest`] into a [`TabView`]. Assembly is a
//! pure function of the request and the [`DepictionConstants`]: no I/O, no
//! logging, and identical input always yields an identical tree.

use depictor_package::{Control, Display, Screenshots};
use depictor_views::{TabView, ViewNode};

use crate::constants::DepictionConstants;
use crate::escape::url_component;
use crate::sections::{SPACING, changelog_row, screenshots_section, source_code_section};

pub const DETAILS_TAB: &str = "Details";
pub const CHANGES_TAB: &str = "Changes";
pub const CONTACT_TAB: &str = "Contact";

const DONATE_Y_PADDING: u32 = 10;

/// Which tab to build, carrying exactly the records that tab reads.
#[derive(Clone, Copy, Debug)]
pub enum TabRequest<'a> {
    Details {
        display: &'a Display,
        control: &'a Control,
        screenshots: &'a Screenshots,
    },
    Changes {
        display: &'a Display,
    },
    Contact {
        display: &'a Display,
        control: &'a Control,
    },
}

impl TabRequest<'_> {
    /// Label of the tab this request produces.
    #[must_use]
    pub fn tab_name(&self) -> &'static str {
        match self {
            Self::Details { .. } => DETAILS_TAB,
            Self::Changes { .. } => CHANGES_TAB,
            Self::Contact { .. } => CONTACT_TAB,
        }
    }
}

/// Build a tab with the default constants.
pub fn build(request: &TabRequest<'_>) -> TabView {
    TabBuilder::new(&DepictionConstants::default()).build(request)
}

/// Tab assembler bound to a set of constants.
#[derive(Clone, Copy, Debug)]
pub struct TabBuilder<'c> {
    constants: &'c DepictionConstants,
}

impl<'c> TabBuilder<'c> {
    #[must_use]
    pub fn new(constants: &'c DepictionConstants) -> Self {
        Self { constants }
    }

    /// Build the tab selected by `request`.
    #[must_use]
    pub fn build(&self, request: &TabRequest<'_>) -> TabView {
        let views = match *request {
            TabRequest::Details {
                display,
                control,
                screenshots,
            } => self.details(display, control, screenshots),
            TabRequest::Changes { display } => changes(display),
            TabRequest::Contact { display, control: _ } => self.contact(display),
        };
        TabView::new(request.tab_name(), views)
    }

    fn details(
        &self,
        display: &Display,
        control: &Control,
        screenshots: &Screenshots,
    ) -> Vec<ViewNode> {
        let c = self.constants;

        let mut views = vec![
            ViewNode::spacer(SPACING),
            ViewNode::button(&c.donate_text, &c.donate_link, DONATE_Y_PADDING),
        ];
        views.extend(screenshots_section(
            &control.package_name,
            screenshots,
            &c.api_url,
        ));
        views.push(ViewNode::markdown(&display.information.description));
        views.extend(source_code_section(&display.information.source_code_link));
        views.extend([
            ViewNode::header("Extra information"),
            ViewNode::table_text("Version", &control.version),
            ViewNode::table_button("Twitter", self.twitter_link(display)),
            ViewNode::table_button(
                "Email",
                format!(
                    "{}?subject={}",
                    self.mailto_link(display),
                    self.component(&control.name)
                ),
            ),
            ViewNode::table_button("View web depiction", self.web_depiction_link(control)),
        ]);
        views
    }

    fn contact(&self, display: &Display) -> Vec<ViewNode> {
        vec![
            ViewNode::table_button("Email", self.mailto_link(display)),
            ViewNode::table_button("Twitter", self.twitter_link(display)),
        ]
    }

    fn twitter_link(&self, display: &Display) -> String {
        format!(
            "https://twitter.com/{}",
            self.component(&display.contact.twitter)
        )
    }

    fn mailto_link(&self, display: &Display) -> String {
        format!("mailto:{}", self.component(&display.contact.email))
    }

    fn web_depiction_link(&self, control: &Control) -> String {
        format!(
            "{}?packageId={}",
            self.constants.web_depiction_url,
            self.component(&control.package_name)
        )
    }

    fn component<'v>(&self, value: &'v str) -> std::borrow::Cow<'v, str> {
        url_component(value, self.constants.escape_url_components)
    }
}

/// Newest release first, three nodes per release.
fn changes(display: &Display) -> Vec<ViewNode> {
    display.changelog.iter().rev().flat_map(changelog_row).collect()
}

#[cfg(test)]
mod tests {
    use depictor_package::{ChangelogEntry, Contact, Information};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::constants::DEFAULT_API_URL;

    fn display() -> Display {
        Display {
            information: Information {
                description: "A **demo** package".to_owned(),
                source_code_link: String::new(),
            },
            contact: Contact {
                email: "dev@example.com".to_owned(),
                twitter: "devhandle".to_owned(),
            },
            changelog: vec![
                ChangelogEntry::new("1.0", "day1", "- first"),
                ChangelogEntry::new("1.1", "day2", "- second"),
            ],
        }
    }

    fn control() -> Control {
        Control::new("pkg.demo", "1.1", "Demo")
    }

    fn details(display: &Display, control: &Control, screenshots: &Screenshots) -> TabView {
        build(&TabRequest::Details {
            display,
            control,
            screenshots,
        })
    }

    #[test]
    fn test_tab_names_match_variant() {
        let (display, control, shots) = (display(), control(), Screenshots::default());
        assert_eq!(details(&display, &control, &shots).tab_name, "Details");
        assert_eq!(build(&TabRequest::Changes { display: &display }).tab_name, "Changes");
        assert_eq!(
            build(&TabRequest::Contact {
                display: &display,
                control: &control
            })
            .tab_name,
            "Contact"
        );
    }

    #[test]
    fn test_details_without_screenshots_or_source() {
        let tab = details(&display(), &control(), &Screenshots::new(["*"]));
        let constants = DepictionConstants::default();

        assert_eq!(
            tab.views,
            vec![
                ViewNode::spacer(12),
                ViewNode::button(&constants.donate_text, &constants.donate_link, 10),
                ViewNode::markdown("A **demo** package"),
                ViewNode::Separator,
                ViewNode::header("Extra information"),
                ViewNode::table_text("Version", "1.1"),
                ViewNode::table_button("Twitter", "https://twitter.com/devhandle"),
                ViewNode::table_button("Email", "mailto:dev@example.com?subject=Demo"),
                ViewNode::table_button(
                    "View web depiction",
                    "https://p2kdev.github.io/repo/depictions/index.html?packageId=pkg.demo"
                ),
            ]
        );
    }

    #[test]
    fn test_details_with_screenshots_and_source() {
        let mut display = display();
        display.information.source_code_link = "https://git.example/x".to_owned();
        let tab = details(&display, &control(), &Screenshots::new(["a.png", "b.png"]));

        let kinds: Vec<_> = tab.views.iter().map(ViewNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "spacer",
                "button",
                "screenshots-gallery",
                "markdown",
                "separator",
                "table-button",
                "separator",
                "header",
                "table-text",
                "table-button",
                "table-button",
                "table-button",
            ]
        );

        let ViewNode::Screenshots { screenshots, .. } = &tab.views[2] else {
            panic!("expected gallery");
        };
        assert_eq!(
            screenshots[0].url,
            format!("{DEFAULT_API_URL}/pkg.demo/screenshots/a.png")
        );
        assert_eq!(
            tab.views[5],
            ViewNode::table_button("View source code", "https://git.example/x")
        );
    }

    #[test]
    fn test_details_interpolates_verbatim_by_default() {
        let mut display = display();
        display.contact.twitter = "a b".to_owned();
        display.information.source_code_link = "https://git.example/my repo".to_owned();
        let control = Control::new("pkg demo", "1.0", "Tom & Jerry");
        let tab = details(&display, &control, &Screenshots::default());

        let actions: Vec<_> = tab
            .views
            .iter()
            .filter_map(|view| match view {
                ViewNode::TableButton { action, .. } => Some(action.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            actions,
            vec![
                "https://twitter.com/a b",
                "mailto:dev@example.com?subject=Tom & Jerry",
                "https://p2kdev.github.io/repo/depictions/index.html?packageId=pkg demo",
            ]
        );
    }

    #[test]
    fn test_escaping_enabled() {
        let constants = DepictionConstants {
            escape_url_components: true,
            ..DepictionConstants::default()
        };
        let mut display = display();
        display.contact.twitter = "a b".to_owned();
        display.information.source_code_link = "https://git.example/my repo".to_owned();
        let control = Control::new("pkg demo", "1.0", "Tom & Jerry");
        let screenshots = Screenshots::new(["shot one.png"]);

        let tab = TabBuilder::new(&constants).build(&TabRequest::Details {
            display: &display,
            control: &control,
            screenshots: &screenshots,
        });

        assert!(tab.views.contains(&ViewNode::table_button(
            "Email",
            "mailto:dev@example.com?subject=Tom%20%26%20Jerry"
        )));
        assert!(tab.views.contains(&ViewNode::table_button(
            "Twitter",
            "https://twitter.com/a%20b"
        )));
        assert!(tab.views.contains(&ViewNode::table_button(
            "View web depiction",
            "https://p2kdev.github.io/repo/depictions/index.html?packageId=pkg%20demo"
        )));
        // Source link and screenshot paths are never rewritten
        assert!(tab.views.contains(&ViewNode::table_button(
            "View source code",
            "https://git.example/my repo"
        )));
        let ViewNode::Screenshots { screenshots, .. } = &tab.views[2] else {
            panic!("expected gallery");
        };
        assert!(screenshots[0].url.ends_with("/pkg demo/screenshots/shot one.png"));
    }

    #[test]
    fn test_custom_constants() {
        let constants = DepictionConstants {
            api_url: "https://cdn.example".to_owned(),
            web_depiction_url: "https://web.example/d.html".to_owned(),
            donate_text: "Support".to_owned(),
            donate_link: "https://pay.example".to_owned(),
            ..DepictionConstants::default()
        };
        let (display, control) = (display(), control());
        let screenshots = Screenshots::new(["a.png"]);
        let tab = TabBuilder::new(&constants).build(&TabRequest::Details {
            display: &display,
            control: &control,
            screenshots: &screenshots,
        });

        assert_eq!(tab.views[1], ViewNode::button("Support", "https://pay.example", 10));
        let ViewNode::Screenshots { screenshots, .. } = &tab.views[2] else {
            panic!("expected gallery");
        };
        assert_eq!(screenshots[0].url, "https://cdn.example/pkg.demo/screenshots/a.png");
        assert_eq!(
            tab.views.last(),
            Some(&ViewNode::table_button(
                "View web depiction",
                "https://web.example/d.html?packageId=pkg.demo"
            ))
        );
    }

    #[test]
    fn test_changes_newest_first() {
        let tab = build(&TabRequest::Changes {
            display: &display(),
        });
        assert_eq!(tab.views.len(), 6);

        let versions: Vec<_> = tab
            .views
            .iter()
            .filter_map(|view| match view {
                ViewNode::Layer { views } => match &views[0] {
                    ViewNode::Subheader { title, .. } => Some(title.as_str()),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(versions, vec!["1.1", "1.0"]);
        assert_eq!(tab.views[1], ViewNode::spaced_markdown("- second"));
        assert_eq!(tab.views[4], ViewNode::spaced_markdown("- first"));
    }

    #[test]
    fn test_changes_empty_changelog() {
        let mut display = display();
        display.changelog.clear();
        let tab = build(&TabRequest::Changes { display: &display });
        assert_eq!(tab.tab_name, "Changes");
        assert!(tab.views.is_empty());
    }

    #[test]
    fn test_contact_rows() {
        let (display, control) = (display(), control());
        let tab = build(&TabRequest::Contact {
            display: &display,
            control: &control,
        });
        assert_eq!(
            tab.views,
            vec![
                ViewNode::table_button("Email", "mailto:dev@example.com"),
                ViewNode::table_button("Twitter", "https://twitter.com/devhandle"),
            ]
        );
    }

    #[test]
    fn test_contact_always_two_rows() {
        let display = Display::default();
        let control = Control::new("x", "0", "x");
        let tab = build(&TabRequest::Contact {
            display: &display,
            control: &control,
        });
        assert_eq!(tab.views.len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let (display, control) = (display(), control());
        let screenshots = Screenshots::new(["a.png"]);
        let request = TabRequest::Details {
            display: &display,
            control: &control,
            screenshots: &screenshots,
        };
        let first = build(&request);
        let second = build(&request);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_contact_wire_format() {
        let (display, control) = (display(), control());
        let tab = build(&TabRequest::Contact {
            display: &display,
            control: &control,
        });
        assert_eq!(
            serde_json::to_value(tab).unwrap(),
            json!({
                "class": "DepictionStackView",
                "tabname": "Contact",
                "views": [
                    {"class": "DepictionTableButtonView", "title": "Email", "action": "mailto:dev@example.com"},
                    {"class": "DepictionTableButtonView", "title": "Twitter", "action": "https://twitter.com/devhandle"}
                ]
            })
        );
    }
}
