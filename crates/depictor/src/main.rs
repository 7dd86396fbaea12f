//! Depictor CLI - native depiction generator.
//!
//! Provides commands for:
//! - `build`: Write depiction JSON for every package under the source directory
//! - `tab`: Print a single tab of one package as JSON
//! - `check`: Validate a package directory and summarize it

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, TabArgs};
use output::Output;

/// Depictor - native depiction generator.
#[derive(Parser)]
#[command(name = "depictor", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build depictions for all packages.
    Build(BuildArgs),
    /// Print one tab of a package.
    Tab(TabArgs),
    /// Validate a package directory.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Tab(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
