//! Command-line argument types.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "styloprint", version, about = "Deterministic stylometric analysis of dated documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (repeat for more detail). `RUST_LOG` takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a JSON array of documents and print the result as JSON.
    Analyze(AnalyzeArgs),
    /// Print the effective marker table as TOML.
    Markers(MarkersArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// JSON file of `{id, content, date}` records, or `-` for stdin.
    pub input: PathBuf,

    /// Recency window: 7days, 30days, 3months, or 6months.
    #[arg(long)]
    pub timeframe: Option<String>,

    /// Measure the timeframe back from this RFC 3339 instant instead of now.
    #[arg(long, value_parser = parse_instant)]
    pub as_of: Option<DateTime<Utc>>,

    /// Marker table TOML overriding the built-in English features it names.
    #[arg(long)]
    pub markers: Option<PathBuf>,

    /// Settings TOML; flags given on the command line win.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Compute everything on the calling thread.
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MarkersArgs {
    /// Marker table TOML to merge over the built-in English tables.
    #[arg(long)]
    pub markers: Option<PathBuf>,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
