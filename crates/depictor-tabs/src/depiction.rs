//! Root depiction assembly.

use depictor_package::{Control, Display, Package, Screenshots};
use depictor_views::Depiction;

use crate::builder::{TabBuilder, TabRequest};
use crate::constants::DepictionConstants;

/// Assemble the full depiction: Details, Changes and Contact tabs in order.
#[must_use]
pub fn build_depiction(
    display: &Display,
    control: &Control,
    screenshots: &Screenshots,
    constants: &DepictionConstants,
) -> Depiction {
    let builder = TabBuilder::new(constants);
    let requests = [
        TabRequest::Details {
            display,
            control,
            screenshots,
        },
        TabRequest::Changes { display },
        TabRequest::Contact { display, control },
    ];

    Depiction {
        min_version: constants.min_version.clone(),
        tint_color: constants.tint_color.clone(),
        tabs: requests.iter().map(|request| builder.build(request)).collect(),
    }
}

/// [`build_depiction`] for a loaded package.
#[must_use]
pub fn package_depiction(package: &Package, constants: &DepictionConstants) -> Depiction {
    build_depiction(
        &package.display,
        &package.control,
        &package.screenshots,
        constants,
    )
}
