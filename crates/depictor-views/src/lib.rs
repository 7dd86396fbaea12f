//! Native depiction view vocabulary.
//!
//! This crate defines the typed tree that the package manager's rendering
//! layer consumes:
//! - [`ViewNode`]: one variant per view kind, each carrying only its own fields
//! - [`TabView`]: a named stack of views, one per depiction tab
//! - [`Depiction`]: the root document holding all tabs
//!
//! Serialization keys off the `class` tag and the camelCase field names the
//! renderer expects, so the Rust names are free to follow Rust conventions.
//!
//! # Example
//!
//! ```
//! use depictor_views::{TabView, ViewNode};
//!
//! let tab = TabView::new("Contact", vec![ViewNode::table_button("Email", "mailto:dev@example.com")]);
//! assert_eq!(tab.tab_name, "Contact");
//! assert_eq!(tab.views.len(), 1);
//! ```

mod node;
mod screenshot;
mod tab;

pub use node::{Alignment, ViewNode};
pub use screenshot::{ItemSize, Screenshot};
pub use tab::{Depiction, TabView};
