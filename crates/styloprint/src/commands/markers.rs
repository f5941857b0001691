use anyhow::{Context, Result};
use styloprint_markers::MarkerLibrary;

use crate::cli::MarkersArgs;

pub(crate) fn handle(args: MarkersArgs) -> Result<()> {
    let config = super::resolve_markers(args.markers.as_deref())?;
    // Compile first so a bad table is reported rather than printed.
    MarkerLibrary::compile(&config).context("compiling marker table")?;
    print!("{}", config.to_toml().context("rendering marker table")?);
    Ok(())
}
