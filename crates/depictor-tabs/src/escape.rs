//! URL component escaping.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters and `@`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'@');

/// Percent-encode `value` when `enabled`, otherwise borrow it unchanged.
pub(crate) fn url_component(value: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        utf8_percent_encode(value, COMPONENT).into()
    } else {
        Cow::Borrowed(value)
    }
}
