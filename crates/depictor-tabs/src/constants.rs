//! Process-wide depiction constants.

/// Fixed values interpolated into every depiction.
///
/// [`Default`] gives the stock values; configuration may replace them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepictionConstants {
    /// Base URL for per-package assets; screenshots live at
    /// `<api_url>/<package>/screenshots/<file>`.
    pub api_url: String,
    /// Web depiction page; the package id is appended as `?packageId=`.
    pub web_depiction_url: String,
    pub donate_text: String,
    pub donate_link: String,
    /// `minVersion` of the root depiction.
    pub min_version: String,
    pub tint_color: Option<String>,
    /// Percent-encode contact and identifier values before interpolating
    /// them into URLs. Off by default, which keeps them verbatim.
    pub escape_url_components: bool,
}

pub const DEFAULT_API_URL: &str = "https://p2kdev.github.io/repo/depictions";
pub const DEFAULT_WEB_DEPICTION_URL: &str = "https://p2kdev.github.io/repo/depictions/index.html";
pub const DEFAULT_DONATE_TEXT: &str = "Donate";
pub const DEFAULT_DONATE_LINK: &str = "https://p2kdev.github.io/repo/";
pub const DEFAULT_MIN_VERSION: &str = "0.1";

impl Default for DepictionConstants {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            web_depiction_url: DEFAULT_WEB_DEPICTION_URL.to_owned(),
            donate_text: DEFAULT_DONATE_TEXT.to_owned(),
            donate_link: DEFAULT_DONATE_LINK.to_owned(),
            min_version: DEFAULT_MIN_VERSION.to_owned(),
            tint_color: None,
            escape_url_components: false,
        }
    }
}
