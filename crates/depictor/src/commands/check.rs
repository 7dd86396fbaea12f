//! `depictor check` command implementation.

use std::path::PathBuf;

use clap::Args;
use depictor_package::Package;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Package directory.
    package_dir: PathBuf,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let package = Package::load(&self.package_dir)?;

        output.highlight(&format!(
            "{} ({})",
            package.control.name, package.control.package_name
        ));
        for line in summary(&package) {
            output.info(&line);
        }
        output.success("Package is valid");
        Ok(())
    }
}

fn summary(package: &Package) -> Vec<String> {
    let display = &package.display;
    let latest = display
        .latest_change()
        .map_or_else(|| "none".to_owned(), |c| format!("{} ({})", c.version_number, c.date));
    let screenshots = if package.screenshots.is_available() {
        package.screenshots.screenshots.len().to_string()
    } else {
        "none".to_owned()
    };
    let source = if display.information.source_code_link.is_empty() {
        "none"
    } else {
        display.information.source_code_link.as_str()
    };

    vec![
        format!("  Version:     {}", package.control.version),
        format!("  Changelog:   {} entries, latest {latest}", display.changelog.len()),
        format!("  Screenshots: {screenshots}"),
        format!("  Source:      {source}"),
    ]
}
