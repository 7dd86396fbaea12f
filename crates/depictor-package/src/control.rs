//! Debian control stanza parsing.
//!
//! Only the fields a depiction needs are kept. Field names match
//! case-insensitively; continuation lines (leading space or tab) extend the
//! previous field and `#` lines are comments.

use std::collections::HashMap;
use std::path::{Component, Path};

/// Package identity from the control file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    /// Unique package identifier (`Package:`).
    pub package_name: String,
    pub version: String,
    /// Display name (`Name:`), falling back to the identifier.
    pub name: String,
}

/// Why a control stanza was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum ControlError {
    /// A required field was absent or empty.
    MissingField(&'static str),
    /// `Package:` is not usable as a single directory name.
    InvalidPackageName(String),
}

/// Whether `name` is exactly one normal path component.
///
/// Package identifiers become output directory names, so absolute paths,
/// separators and `.`/`..` are rejected.
#[must_use]
pub fn is_valid_package_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part.to_str() == Some(name)
    )
}

impl Control {
    pub fn new(
        package_name: impl Into<String>,
        version: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            version: version.into(),
            name: name.into(),
        }
    }

    /// Parse the first stanza of a control file.
    pub fn parse(content: &str) -> Result<Self, ControlError> {
        let fields = parse_fields(content);
        let get = |key: &str| fields.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let package_name = get("package").ok_or(ControlError::MissingField("Package"))?;
        if !is_valid_package_name(package_name) {
            return Err(ControlError::InvalidPackageName(package_name.to_owned()));
        }
        let version = get("version").ok_or(ControlError::MissingField("Version"))?;
        let name = get("name").unwrap_or(package_name);

        Ok(Self::new(package_name, version, name))
    }
}

/// Collect `Key: value` pairs up to the first blank line.
fn parse_fields(content: &str) -> HashMap<String, String> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut current: Option<String> = None;

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    for line in content.lines() {
        if line.trim().is_empty() {
            if fields.is_empty() {
                continue;
            }
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        if line.starts_with([' ', '\t']) {
            if let Some(value) = current.as_ref().and_then(|key| fields.get_mut(key)) {
                value.push('\n');
                value.push_str(line.trim());
            }
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_ascii_lowercase();
            fields.insert(key.clone(), value.trim().to_owned());
            current = Some(key);
        }
    }

    fields
}
