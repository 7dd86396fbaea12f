//! Package loading errors.

use std::path::PathBuf;

/// Error returned when a package directory cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    /// Reading a file or directory failed.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Neither `control` nor `DEBIAN/control` exists.
    #[error("No control file in {}", .0.display())]
    MissingControl(PathBuf),
    /// No `display.json`, `display.yaml` or `display.yml` exists.
    #[error("No display file in {}", .0.display())]
    MissingDisplay(PathBuf),
    /// A required control field is absent or empty.
    #[error("{}: missing required field `{field}`", path.display())]
    ControlField { path: PathBuf, field: &'static str },
    /// `Package:` is not a single directory name.
    #[error("{}: invalid package name `{name}`", path.display())]
    InvalidPackageName { path: PathBuf, name: String },
    /// JSON parsing error.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// YAML parsing error.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl PackageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
