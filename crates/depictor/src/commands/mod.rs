//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod tab;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use tab::TabArgs;

use serde::Serialize;

/// Serialize a view tree, pretty-printed or compact.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
