//! Package metadata records and loading for Depictor.
//!
//! This crate provides:
//! - [`Display`], [`Control`], [`Screenshots`]: the inputs a depiction is built from
//! - [`Package::load`]: reads all three from a package directory
//! - [`discover_packages`]: finds package directories under a source root

mod control;
mod display;
mod error;
mod package;
mod screenshots;

pub use control::{Control, ControlError, is_valid_package_name};
pub use display::{ChangelogEntry, Contact, Display, Information};
pub use error::PackageError;
pub use package::{Package, discover_packages};
pub use screenshots::{NO_SCREENSHOTS, Screenshots};
