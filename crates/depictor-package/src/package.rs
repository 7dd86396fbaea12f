//! Package directory loading.
//!
//! A package directory holds:
//! - `control` or `DEBIAN/control`: Debian control stanza
//! - `display.json`, `display.yaml` or `display.yml`: [`Display`] record
//! - `screenshots.json`, or a `screenshots/` directory of images (optional)

use std::path::{Path, PathBuf};

use crate::control::{Control, ControlError};
use crate::display::Display;
use crate::error::PackageError;
use crate::screenshots::Screenshots;

const CONTROL_CANDIDATES: &[&str] = &["control", "DEBIAN/control"];
const DISPLAY_CANDIDATES: &[&str] = &["display.json", "display.yaml", "display.yml"];
const SCREENSHOTS_FILE: &str = "screenshots.json";
const SCREENSHOTS_DIR: &str = "screenshots";

/// All depiction inputs for one package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    /// Directory the package was loaded from.
    pub dir: PathBuf,
    pub control: Control,
    pub display: Display,
    pub screenshots: Screenshots,
}

impl Package {
    /// Load a package from its directory.
    pub fn load(dir: &Path) -> Result<Self, PackageError> {
        let control = load_control(dir)?;
        let display = load_display(dir)?;
        let screenshots = load_screenshots(dir)?;

        let changelog = display.changelog.len();
        let screenshot_count = screenshots.screenshots.len();
        tracing::debug!(
            package = %control.package_name,
            changelog,
            screenshots = screenshot_count,
            "Loaded package"
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            control,
            display,
            screenshots,
        })
    }
}

/// Find package directories directly under `root`.
///
/// A subdirectory counts as a package when it contains a control file.
/// Results are sorted by path so output order is stable.
pub fn discover_packages(root: &Path) -> Result<Vec<PathBuf>, PackageError> {
    let entries = std::fs::read_dir(root).map_err(|e| PackageError::io(root, e))?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackageError::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if find_first(&path, CONTROL_CANDIDATES).is_some() {
            packages.push(path);
        } else {
            tracing::warn!(path = %path.display(), "Skipping directory without control file");
        }
    }
    packages.sort();
    Ok(packages)
}

fn find_first(dir: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn read(path: &Path) -> Result<String, PackageError> {
    tracing::debug!(path = %path.display(), "Reading");
    std::fs::read_to_string(path).map_err(|e| PackageError::io(path, e))
}

fn load_control(dir: &Path) -> Result<Control, PackageError> {
    let path = find_first(dir, CONTROL_CANDIDATES)
        .ok_or_else(|| PackageError::MissingControl(dir.to_path_buf()))?;
    let content = read(&path)?;
    Control::parse(&content).map_err(|err| match err {
        ControlError::MissingField(field) => PackageError::ControlField { path, field },
        ControlError::InvalidPackageName(name) => {
            PackageError::InvalidPackageName { path, name }
        }
    })
}

fn load_display(dir: &Path) -> Result<Display, PackageError> {
    let path = find_first(dir, DISPLAY_CANDIDATES)
        .ok_or_else(|| PackageError::MissingDisplay(dir.to_path_buf()))?;
    let content = read(&path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Display::from_json(&content).map_err(|source| PackageError::Json { path, source })
    } else {
        Display::from_yaml(&content).map_err(|source| PackageError::Yaml { path, source })
    }
}

/// Screenshot list from `screenshots.json`, else from the `screenshots/`
/// directory listing, else empty.
fn load_screenshots(dir: &Path) -> Result<Screenshots, PackageError> {
    let file = dir.join(SCREENSHOTS_FILE);
    if file.is_file() {
        let content = read(&file)?;
        return Screenshots::from_json(&content)
            .map_err(|source| PackageError::Json { path: file, source });
    }

    let shots_dir = dir.join(SCREENSHOTS_DIR);
    if !shots_dir.is_dir() {
        return Ok(Screenshots::default());
    }

    let entries = std::fs::read_dir(&shots_dir).map_err(|e| PackageError::io(&shots_dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackageError::io(&shots_dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if name.starts_with('.') => {}
            Ok(name) => names.push(name),
            Err(name) => {
                tracing::warn!(name = ?name, "Skipping screenshot with non-UTF-8 name");
            }
        }
    }
    names.sort();
    Ok(Screenshots::new(names))
}
