//! # styloprint
//!
//! **CLI Binary**
//!
//! Entry point for the `styloprint` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load settings and marker tables
//! * Install the log subscriber
//! * Dispatch commands and report errors
//!
//! Scoring lives in `styloprint-analysis`; this crate only wires it up.

pub mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

pub use commands::resolve_markers;

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` overrides `-v`.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    // A second install (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => commands::analyze::handle(args),
        Commands::Markers(args) => commands::markers::handle(args),
    }
}

/// Render an error and its causes, one per line.
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("Error: {err}");
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {cause}"));
    }
    out
}
