//! `depictor tab` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use depictor_config::Config;
use depictor_package::Package;
use depictor_tabs::{TabBuilder, TabRequest};

use super::to_json;
use crate::error::CliError;
use crate::output::Output;

/// Tab to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TabKind {
    Details,
    Changes,
    Contact,
}

/// Arguments for the tab command.
#[derive(Args)]
pub(crate) struct TabArgs {
    /// Which tab to render.
    #[arg(value_enum)]
    kind: TabKind,

    /// Package directory.
    package_dir: PathBuf,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Path to configuration file (default: auto-discover depictor.toml).
    #[arg(short, long, env = "DEPICTOR_CONFIG")]
    config: Option<PathBuf>,
}

impl TabArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let constants = config.depiction_constants();
        let package = Package::load(&self.package_dir)?;

        let tab = TabBuilder::new(&constants).build(&request(self.kind, &package));
        output.data(&to_json(&tab, !self.compact && config.pretty)?);
        Ok(())
    }
}

fn request(kind: TabKind, package: &Package) -> TabRequest<'_> {
    match kind {
        TabKind::Details => TabRequest::Details {
            display: &package.display,
            control: &package.control,
            screenshots: &package.screenshots,
        },
        TabKind::Changes => TabRequest::Changes {
            display: &package.display,
        },
        TabKind::Contact => TabRequest::Contact {
            display: &package.display,
            control: &package.control,
        },
    }
}
