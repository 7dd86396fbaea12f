//! `depictor build` command implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::Args;
use depictor_config::{CliSettings, Config};
use depictor_package::{Package, discover_packages, is_valid_package_name};
use depictor_tabs::{DepictionConstants, package_depiction};

use super::to_json;
use crate::error::CliError;
use crate::output::Output;

/// File written inside each package's output directory.
const DEPICTION_FILENAME: &str = "depiction.json";

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Directory containing package directories (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for depiction files (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Path to configuration file (default: auto-discover depictor.toml).
    #[arg(short, long, env = "DEPICTOR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            pretty: self.compact.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let constants = config.depiction_constants();
        let source_dir = &config.paths.source_dir;
        let output_dir = &config.paths.output_dir;

        output.info(&format!("Source: {}", source_dir.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        let packages = discover_packages(source_dir)?;
        if packages.is_empty() {
            output.warning("No packages found");
            return Ok(());
        }

        let (written, failed) =
            build_packages(&packages, &constants, output_dir, config.pretty, &output)?;

        output.success(&format!("Built {written} depiction(s)"));
        if failed > 0 {
            return Err(CliError::Validation(format!(
                "{failed} package(s) failed to load"
            )));
        }
        Ok(())
    }
}

/// Load and write each package, returning `(written, failed)` counts.
///
/// A package whose identifier was already written in this run is skipped so
/// it cannot overwrite the earlier depiction.
fn build_packages(
    dirs: &[PathBuf],
    constants: &DepictionConstants,
    output_dir: &Path,
    pretty: bool,
    output: &Output,
) -> Result<(usize, usize), CliError> {
    let mut seen = HashSet::new();
    let mut written = 0usize;
    let mut failed = 0usize;
    for dir in dirs {
        let package = match Package::load(dir) {
            Ok(package) => package,
            Err(err) => {
                output.error(&format!("Skipping {}: {err}", dir.display()));
                failed += 1;
                continue;
            }
        };
        if !seen.insert(package.control.package_name.clone()) {
            output.error(&format!(
                "Skipping {}: duplicate package `{}`",
                dir.display(),
                package.control.package_name
            ));
            failed += 1;
            continue;
        }
        let path = write_depiction(&package, constants, output_dir, pretty)?;
        tracing::info!(package = %package.control.package_name, path = %path.display(), "Wrote depiction");
        written += 1;
    }
    Ok((written, failed))
}

/// Write `<output_dir>/<package>/depiction.json` and return its path.
fn write_depiction(
    package: &Package,
    constants: &DepictionConstants,
    output_dir: &Path,
    pretty: bool,
) -> Result<PathBuf, CliError> {
    let name = &package.control.package_name;
    if !is_valid_package_name(name) {
        return Err(CliError::Validation(format!(
            "package name `{name}` must be a single path component"
        )));
    }

    let depiction = package_depiction(package, constants);
    let json = to_json(&depiction, pretty)?;

    let dir = output_dir.join(name);
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(DEPICTION_FILENAME);
    std::fs::write(&path, json)?;
    Ok(path)
}
