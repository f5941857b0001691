use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use styloprint_analysis::Engine;
use styloprint_markers::MarkerLibrary;
use styloprint_settings::AnalyzeSettings;
use styloprint_types::{Document, Timeframe};
use tracing::info;

use crate::cli::AnalyzeArgs;

/// Settings file first, then command-line flags on top.
fn resolve_settings(args: &AnalyzeArgs) -> Result<AnalyzeSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let mut s = AnalyzeSettings::from_file(path)
                .with_context(|| format!("loading settings {}", path.display()))?;
            // Marker paths in a settings file are relative to that file.
            if let Some(dir) = path.parent() {
                s.markers = s
                    .markers
                    .take()
                    .map(|m| if m.is_relative() { dir.join(m) } else { m });
            }
            s
        }
        None => AnalyzeSettings::default(),
    };
    if let Some(tf) = &args.timeframe {
        settings.timeframe = Timeframe::from_label(tf);
    }
    if let Some(as_of) = args.as_of {
        settings.as_of = Some(as_of);
    }
    if let Some(markers) = &args.markers {
        settings.markers = Some(markers.clone());
    }
    if args.sequential {
        settings.parallel = false;
    }
    Ok(settings)
}

fn read_documents(input: &Path) -> Result<Vec<Document>> {
    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading documents from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("reading documents from {}", input.display()))?
    };
    serde_json::from_str(&raw).context("parsing documents JSON")
}

pub(crate) fn handle(args: AnalyzeArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;
    let markers_path: Option<PathBuf> = settings.markers.clone();
    let config = super::resolve_markers(markers_path.as_deref())?;
    let markers = MarkerLibrary::compile(&config).context("compiling marker table")?;

    let documents = read_documents(&args.input)?;
    info!(
        documents = documents.len(),
        timeframe = %settings.timeframe,
        parallel = settings.parallel,
        "analyzing"
    );

    let engine = Engine::new(markers).parallel(settings.parallel);
    let result = engine.analyze_at(&documents, settings.timeframe, settings.now());

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}
