//! Native depiction tab assembly.
//!
//! Converts package records into depiction view trees:
//! - [`build`] / [`TabBuilder`]: one tab from a [`TabRequest`]
//! - [`build_depiction`]: the root document with all three tabs
//! - [`changelog_row`], [`source_code_section`], [`screenshots_section`]:
//!   the repeating sequences the tabs are made of
//!
//! Everything here is pure and total.
//!
//! # Example
//!
//! ```
//! use depictor_package::Display;
//! use depictor_tabs::{TabRequest, build};
//!
//! let display = Display::default();
//! let tab = build(&TabRequest::Changes { display: &display });
//! assert_eq!(tab.tab_name, "Changes");
//! assert!(tab.views.is_empty());
//! ```

mod builder;
mod constants;
mod depiction;
mod escape;
mod sections;

pub use builder::{CHANGES_TAB, CONTACT_TAB, DETAILS_TAB, TabBuilder, TabRequest, build};
pub use constants::{
    DEFAULT_API_URL, DEFAULT_DONATE_LINK, DEFAULT_DONATE_TEXT, DEFAULT_MIN_VERSION,
    DEFAULT_WEB_DEPICTION_URL, DepictionConstants,
};
pub use depiction::{build_depiction, package_depiction};
pub use sections::{
    SCREENSHOT_CORNER_RADIUS, SCREENSHOT_ITEM_SIZE, SPACING, changelog_row, screenshots_section,
    source_code_section,
};
